use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors for the favorite, shopping cart, and subscription toggles.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RelationError {
    #[error("Recipe ID {0:?} not found")]
    RecipeNotFound(i32),
    #[error("Author ID {0:?} not found")]
    AuthorNotFound(i32),
    #[error("{edge} already exists for user ID {user_id:?} and target ID {target_id:?}")]
    AlreadyExists {
        edge: &'static str,
        user_id: i32,
        target_id: i32,
    },
    #[error("No {edge} exists for user ID {user_id:?} and target ID {target_id:?}")]
    EdgeNotFound {
        edge: &'static str,
        user_id: i32,
        target_id: i32,
    },
    #[error("User ID {0:?} cannot subscribe to themselves")]
    SelfSubscription(i32),
}

impl RelationError {
    fn not_found(message: &str) -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }

    fn bad_request(message: String) -> Response {
        (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
    }
}

impl IntoResponse for RelationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::RecipeNotFound(_) => Self::not_found("Recipe not found"),
            Self::AuthorNotFound(_) => Self::not_found("Author not found"),
            Self::AlreadyExists { edge, .. } => {
                Self::bad_request(format!("This {} already exists", edge))
            }
            Self::EdgeNotFound { edge, .. } => {
                Self::bad_request(format!("This {} does not exist", edge))
            }
            Self::SelfSubscription(_) => {
                Self::bad_request("You cannot subscribe to yourself".to_string())
            }
        }
    }
}
