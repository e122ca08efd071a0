use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Validation failures for a submitted recipe composition.
///
/// Each variant names the offending ID or value so the client can correct the
/// exact field that failed.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CompositionError {
    #[error("A recipe requires at least one ingredient")]
    EmptyIngredients,
    #[error("A recipe requires at least one tag")]
    EmptyTags,
    #[error("Ingredient ID {0:?} does not exist")]
    UnknownIngredient(i32),
    #[error("Ingredient ID {0:?} is listed more than once")]
    DuplicateIngredient(i32),
    #[error("Tag ID {0:?} does not exist")]
    UnknownTag(i32),
    #[error("Tag ID {0:?} is listed more than once")]
    DuplicateTag(i32),
    #[error("Amount {amount:?} for ingredient ID {ingredient_id:?} must be at least 1")]
    InvalidAmount { ingredient_id: i32, amount: i32 },
    #[error("Cooking time {0:?} must be at least 1 minute")]
    InvalidCookingTime(i32),
    #[error("Invalid recipe image: {0}")]
    InvalidImage(String),
}

impl IntoResponse for CompositionError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
