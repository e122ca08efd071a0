use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors for ingredient and tag catalog operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Ingredient ID {0:?} not found")]
    IngredientNotFound(i32),
    #[error("Tag ID {0:?} not found")]
    TagNotFound(i32),
    #[error("A tag named {0:?} or with that slug already exists")]
    DuplicateTag(String),
    #[error("Color {0:?} is not a valid hex color such as #E26C2D")]
    InvalidColor(String),
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::IngredientNotFound(_) | Self::TagNotFound(_) => StatusCode::NOT_FOUND,
            Self::DuplicateTag(_) => StatusCode::CONFLICT,
            Self::InvalidColor(_) => StatusCode::BAD_REQUEST,
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
