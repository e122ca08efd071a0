use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors for user registration and profile lookup.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UserError {
    #[error("Username {0:?} contains characters outside letters, digits, and .@+-_")]
    InvalidUsername(String),
    #[error("Username {0:?} is reserved")]
    ReservedUsername(String),
    #[error("Email {0:?} is already registered")]
    EmailTaken(String),
    #[error("Username {0:?} is already registered")]
    UsernameTaken(String),
    #[error("User ID {0:?} not found")]
    UserNotFound(i32),
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::InvalidUsername(_) | Self::ReservedUsername(_) => StatusCode::BAD_REQUEST,
            Self::EmailTaken(_) | Self::UsernameTaken(_) => StatusCode::CONFLICT,
            Self::UserNotFound(_) => StatusCode::NOT_FOUND,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
