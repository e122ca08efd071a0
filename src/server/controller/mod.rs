//! HTTP controller endpoints for the Platter web API.
//!
//! This module contains Axum handlers for user accounts, recipes, the relation
//! toggles, and the ingredient/tag catalog. Controllers handle HTTP requests,
//! validate inputs, interact with services, and return appropriate HTTP
//! responses. They integrate with tower-sessions for session management and use
//! utoipa for OpenAPI documentation.

pub mod ingredient;
pub mod recipe;
pub mod tag;
pub mod user;
