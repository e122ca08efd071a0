//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Constructs an Axum router with the user, recipe, and catalog endpoints registered.
/// Each endpoint is annotated with OpenAPI specifications via utoipa, which are collected
/// into a unified OpenAPI document. The router includes Swagger UI at `/api/docs` for
/// interactive API exploration and testing.
///
/// # Registered Endpoints
/// - `POST /api/users` - Register a user account
/// - `GET /api/users/me` - Get the current user
/// - `GET /api/users/{id}` - Get a user profile
/// - `POST/DELETE /api/users/{id}/subscribe` - Toggle a subscription
/// - `GET /api/users/subscriptions` - List followed authors
/// - `GET/POST /api/recipes` - List and publish recipes
/// - `GET/PATCH/DELETE /api/recipes/{id}` - Read, update, and delete a recipe
/// - `POST/DELETE /api/recipes/{id}/favorite` - Toggle a favorite
/// - `POST/DELETE /api/recipes/{id}/shopping_cart` - Toggle a cart item
/// - `GET /api/recipes/download_shopping_cart` - Download the shopping list
/// - `GET /api/ingredients` - List ingredients with optional prefix search
/// - `GET /api/ingredients/{id}` - Get an ingredient
/// - `POST /api/ingredients/load` - Bootstrap ingredient records
/// - `GET/POST /api/tags`, `GET /api/tags/{id}` - Tag catalog
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be served once state
/// and the session layer are attached.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Platter", description = "Platter API"), tags(
        (name = controller::user::USER_TAG, description = "User account and subscription routes"),
        (name = controller::recipe::RECIPE_TAG, description = "Recipe, favorite, and shopping cart routes"),
        (name = controller::ingredient::INGREDIENT_TAG, description = "Ingredient catalog routes"),
        (name = controller::tag::TAG_TAG, description = "Tag catalog routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::register))
        .routes(routes!(controller::user::get_me))
        .routes(routes!(controller::user::list_subscriptions))
        .routes(routes!(controller::user::get_profile))
        .routes(routes!(
            controller::user::subscribe,
            controller::user::unsubscribe
        ))
        .routes(routes!(
            controller::recipe::list_recipes,
            controller::recipe::create_recipe
        ))
        .routes(routes!(controller::recipe::download_shopping_cart))
        .routes(routes!(
            controller::recipe::get_recipe,
            controller::recipe::update_recipe,
            controller::recipe::delete_recipe
        ))
        .routes(routes!(
            controller::recipe::add_favorite,
            controller::recipe::remove_favorite
        ))
        .routes(routes!(
            controller::recipe::add_to_shopping_cart,
            controller::recipe::remove_from_shopping_cart
        ))
        .routes(routes!(controller::ingredient::list_ingredients))
        .routes(routes!(controller::ingredient::load_ingredients))
        .routes(routes!(controller::ingredient::get_ingredient))
        .routes(routes!(controller::tag::list_tags, controller::tag::create_tag))
        .routes(routes!(controller::tag::get_tag))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
