//! Error types for the Platter server application.
//!
//! This module provides a comprehensive error handling system with specialized error types
//! for different domains (authentication, recipe composition, relation toggles, catalog,
//! user accounts). All errors implement `IntoResponse` for Axum HTTP responses and use
//! `thiserror` for ergonomic error definitions with automatic `Display` and `Error` trait
//! implementations.

pub mod auth;
pub mod catalog;
pub mod composition;
pub mod relation;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, catalog::CatalogError, composition::CompositionError,
        relation::RelationError, user::UserError,
    },
};

/// Main error type for the Platter server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse`
/// implementation maps errors to appropriate HTTP responses for API consumers.
///
/// # Error Categories
/// - Authentication errors (session identity, authorship checks)
/// - Composition errors (recipe ingredient/tag/amount validation)
/// - Relation errors (favorite, shopping cart, and subscription toggles)
/// - Catalog errors (ingredient and tag lookup/creation)
/// - User errors (registration validation, profile lookup)
/// - External library errors (database, sessions)
#[derive(Error, Debug)]
pub enum Error {
    /// Authentication error (missing session identity, authorship violation).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Recipe composition error (empty or invalid ingredient/tag sets, bad amounts).
    #[error(transparent)]
    CompositionError(#[from] CompositionError),
    /// Relation toggle error (favorites, shopping cart items, subscriptions).
    #[error(transparent)]
    RelationError(#[from] RelationError),
    /// Catalog error (ingredient or tag lookup and creation).
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// User account error (registration validation, profile lookup).
    #[error(transparent)]
    UserError(#[from] UserError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
}

/// Converts application errors into HTTP responses.
///
/// Maps domain-specific errors to appropriate HTTP status codes and JSON error responses.
/// Most errors are treated as internal server errors (500) with logging, while the domain
/// error types have custom response mappings.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AuthError(err) => err.into_response(),
            Self::CompositionError(err) => err.into_response(),
            Self::RelationError(err) => err.into_response(),
            Self::CatalogError(err) => err.into_response(),
            Self::UserError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
impl From<Error> for platter_test_utils::TestError {
    fn from(err: Error) -> Self {
        match err {
            Error::DbErr(e) => Self::DbErr(e),
            Error::SessionError(e) => Self::SessionError(e),
            err => Self::Custom(err.to_string()),
        }
    }
}
