use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        catalog::{BootstrapResultDto, IngredientDto, IngredientRecordDto, IngredientSearchDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{ingredient::IngredientService, recipe::projection},
    },
};

pub static INGREDIENT_TAG: &str = "ingredient";

/// List ingredients, optionally filtered by a name prefix
#[utoipa::path(
    get,
    path = "/api/ingredients",
    tag = INGREDIENT_TAG,
    params(IngredientSearchDto),
    responses(
        (status = 200, description = "Matching ingredients", body = Vec<IngredientDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_ingredients(
    State(state): State<AppState>,
    Query(query): Query<IngredientSearchDto>,
) -> Result<impl IntoResponse, Error> {
    let ingredients = IngredientService::new(&state.db)
        .search(query.name.as_deref())
        .await?;

    let dtos = ingredients
        .iter()
        .map(projection::ingredient_dto)
        .collect::<Vec<_>>();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a single ingredient
#[utoipa::path(
    get,
    path = "/api/ingredients/{id}",
    tag = INGREDIENT_TAG,
    params(("id" = i32, Path, description = "Ingredient ID")),
    responses(
        (status = 200, description = "The ingredient", body = IngredientDto),
        (status = 404, description = "Ingredient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ingredient(
    State(state): State<AppState>,
    Path(ingredient_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let ingredient = IngredientService::new(&state.db)
        .get_ingredient(ingredient_id)
        .await?;

    Ok((StatusCode::OK, Json(projection::ingredient_dto(&ingredient))))
}

/// Load ingredient records with get-or-create semantics
#[utoipa::path(
    post,
    path = "/api/ingredients/load",
    tag = INGREDIENT_TAG,
    request_body = Vec<IngredientRecordDto>,
    responses(
        (status = 200, description = "Load result", body = BootstrapResultDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn load_ingredients(
    State(state): State<AppState>,
    Json(records): Json<Vec<IngredientRecordDto>>,
) -> Result<impl IntoResponse, Error> {
    let created = IngredientService::new(&state.db).bootstrap(&records).await?;

    Ok((StatusCode::OK, Json(BootstrapResultDto { created })))
}
