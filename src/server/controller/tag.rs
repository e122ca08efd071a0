use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        catalog::{CreateTagDto, TagDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{recipe::projection, tag::TagService},
    },
};

pub static TAG_TAG: &str = "tag";

/// List every tag
#[utoipa::path(
    get,
    path = "/api/tags",
    tag = TAG_TAG,
    responses(
        (status = 200, description = "All tags", body = Vec<TagDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tags(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let tags = TagService::new(&state.db).list_tags().await?;

    let dtos = tags.iter().map(projection::tag_dto).collect::<Vec<_>>();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a single tag
#[utoipa::path(
    get,
    path = "/api/tags/{id}",
    tag = TAG_TAG,
    params(("id" = i32, Path, description = "Tag ID")),
    responses(
        (status = 200, description = "The tag", body = TagDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let tag = TagService::new(&state.db).get_tag(tag_id).await?;

    Ok((StatusCode::OK, Json(projection::tag_dto(&tag))))
}

/// Create a tag
#[utoipa::path(
    post,
    path = "/api/tags",
    tag = TAG_TAG,
    request_body = CreateTagDto,
    responses(
        (status = 201, description = "Tag created", body = TagDto),
        (status = 400, description = "Invalid color", body = ErrorDto),
        (status = 409, description = "Name or slug already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_tag(
    State(state): State<AppState>,
    Json(input): Json<CreateTagDto>,
) -> Result<impl IntoResponse, Error> {
    let tag = TagService::new(&state.db)
        .create_tag(&input.name, &input.color, &input.slug)
        .await?;

    Ok((StatusCode::CREATED, Json(projection::tag_dto(&tag))))
}
