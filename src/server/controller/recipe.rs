use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        recipe::{BriefRecipeDto, RecipeDto, RecipeFilterDto, RecipeInputDto},
    },
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::{
            recipe::RecipeService,
            relation::{FavoriteService, ShoppingCartService},
            shopping_list::ShoppingListService,
            user::UserService,
        },
    },
};

pub static RECIPE_TAG: &str = "recipe";

/// List recipes with optional filters
#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = RECIPE_TAG,
    params(RecipeFilterDto),
    responses(
        (status = 200, description = "Recipes matching the filters", body = Vec<RecipeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_recipes(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<RecipeFilterDto>,
) -> Result<impl IntoResponse, Error> {
    let viewer = SessionUserId::get(&session).await?;

    let recipes = RecipeService::new(&state.db)
        .list_recipes(viewer, &filter)
        .await?;

    Ok((StatusCode::OK, Json(recipes)))
}

/// Publish a new recipe
#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = RECIPE_TAG,
    request_body = RecipeInputDto,
    responses(
        (status = 201, description = "Recipe created", body = RecipeDto),
        (status = 400, description = "Invalid composition", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    session: Session,
    Json(input): Json<RecipeInputDto>,
) -> Result<impl IntoResponse, Error> {
    let user_id = SessionUserId::get(&session)
        .await?
        .ok_or(AuthError::NotLoggedIn)?;

    let recipe = RecipeService::new(&state.db)
        .create_recipe(user_id, &input)
        .await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

/// Get a single recipe
#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 200, description = "The recipe", body = RecipeDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let viewer = SessionUserId::get(&session).await?;

    let recipe = RecipeService::new(&state.db)
        .get_recipe(viewer, recipe_id)
        .await?;

    Ok((StatusCode::OK, Json(recipe)))
}

/// Update a recipe, replacing its ingredient and tag sets
#[utoipa::path(
    patch,
    path = "/api/recipes/{id}",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    request_body = RecipeInputDto,
    responses(
        (status = 200, description = "Recipe updated", body = RecipeDto),
        (status = 400, description = "Invalid composition", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not the recipe author", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_recipe(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
    Json(input): Json<RecipeInputDto>,
) -> Result<impl IntoResponse, Error> {
    let user_id = SessionUserId::get(&session)
        .await?
        .ok_or(AuthError::NotLoggedIn)?;

    let recipe = RecipeService::new(&state.db)
        .update_recipe(user_id, recipe_id, &input)
        .await?;

    Ok((StatusCode::OK, Json(recipe)))
}

/// Delete a recipe
#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not the recipe author", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_recipe(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = SessionUserId::get(&session)
        .await?
        .ok_or(AuthError::NotLoggedIn)?;

    RecipeService::new(&state.db)
        .delete_recipe(user_id, recipe_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a recipe to the logged in user's favorites
#[utoipa::path(
    post,
    path = "/api/recipes/{id}/favorite",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 201, description = "Recipe favorited", body = BriefRecipeDto),
        (status = 400, description = "Already favorited", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = SessionUserId::get(&session)
        .await?
        .ok_or(AuthError::NotLoggedIn)?;

    let brief = FavoriteService::new(&state.db)
        .add(user_id, recipe_id)
        .await?;

    Ok((StatusCode::CREATED, Json(brief)))
}

/// Remove a recipe from the logged in user's favorites
#[utoipa::path(
    delete,
    path = "/api/recipes/{id}/favorite",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 204, description = "Favorite removed"),
        (status = 400, description = "Recipe was not favorited", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = SessionUserId::get(&session)
        .await?
        .ok_or(AuthError::NotLoggedIn)?;

    FavoriteService::new(&state.db)
        .remove(user_id, recipe_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a recipe to the logged in user's shopping cart
#[utoipa::path(
    post,
    path = "/api/recipes/{id}/shopping_cart",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 201, description = "Recipe added to cart", body = BriefRecipeDto),
        (status = 400, description = "Already in cart", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_to_shopping_cart(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = SessionUserId::get(&session)
        .await?
        .ok_or(AuthError::NotLoggedIn)?;

    let brief = ShoppingCartService::new(&state.db)
        .add(user_id, recipe_id)
        .await?;

    Ok((StatusCode::CREATED, Json(brief)))
}

/// Remove a recipe from the logged in user's shopping cart
#[utoipa::path(
    delete,
    path = "/api/recipes/{id}/shopping_cart",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 204, description = "Recipe removed from cart"),
        (status = 400, description = "Recipe was not in cart", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_from_shopping_cart(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = SessionUserId::get(&session)
        .await?
        .ok_or(AuthError::NotLoggedIn)?;

    ShoppingCartService::new(&state.db)
        .remove(user_id, recipe_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Download the consolidated shopping list as a text attachment
#[utoipa::path(
    get,
    path = "/api/recipes/download_shopping_cart",
    tag = RECIPE_TAG,
    responses(
        (status = 200, description = "Shopping list report", content_type = "text/plain"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn download_shopping_cart(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = SessionUserId::get(&session)
        .await?
        .ok_or(AuthError::NotLoggedIn)?;

    let user = UserService::new(&state.db)
        .get_user(user_id)
        .await?
        .ok_or(AuthError::UserNotInDatabase(user_id))?;

    let report = ShoppingListService::new(&state.db)
        .build_shopping_list(user_id)
        .await?;

    let headers = [
        (
            header::CONTENT_TYPE,
            "text/plain; charset=utf-8".to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!(
                "attachment; filename=\"{}_shopping_cart.txt\"",
                user.username
            ),
        ),
    ];

    Ok((StatusCode::OK, headers, report))
}
