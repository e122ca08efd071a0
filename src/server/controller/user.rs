use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        recipe::RecipesLimitDto,
        user::{ProfileDto, RegisterUserDto, SubscriptionDto, UserDto},
    },
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::{
            recipe::projection, subscription::SubscriptionService, user::UserService,
        },
    },
};

pub static USER_TAG: &str = "user";

/// Register a new user account and log them in
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User registered", body = UserDto),
        (status = 400, description = "Invalid or reserved username", body = ErrorDto),
        (status = 409, description = "Email or username already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(input): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).register(&input).await?;

    SessionUserId::insert(&session, user.id).await?;

    Ok((StatusCode::CREATED, Json(projection::user_dto(&user))))
}

/// Get the logged in user's own account
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = SessionUserId::get(&session)
        .await?
        .ok_or(AuthError::NotLoggedIn)?;

    let user = UserService::new(&state.db)
        .get_user(user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!(
                "Failed to find user ID {} in database despite having an active session",
                user_id
            );

            AuthError::UserNotInDatabase(user_id)
        })?;

    Ok((StatusCode::OK, Json(projection::user_dto(&user))))
}

/// Get a user's profile as seen by the current viewer
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User profile", body = ProfileDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let viewer = SessionUserId::get(&session).await?;

    let profile = UserService::new(&state.db)
        .get_profile(viewer, user_id)
        .await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// Subscribe to an author
#[utoipa::path(
    post,
    path = "/api/users/{id}/subscribe",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "Author's user ID"),
        RecipesLimitDto
    ),
    responses(
        (status = 201, description = "Subscription created", body = SubscriptionDto),
        (status = 400, description = "Already subscribed or subscribing to yourself", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn subscribe(
    State(state): State<AppState>,
    session: Session,
    Path(author_id): Path<i32>,
    Query(query): Query<RecipesLimitDto>,
) -> Result<impl IntoResponse, Error> {
    let user_id = SessionUserId::get(&session)
        .await?
        .ok_or(AuthError::NotLoggedIn)?;

    let subscription = SubscriptionService::new(&state.db)
        .subscribe(user_id, author_id, query.recipes_limit)
        .await?;

    Ok((StatusCode::CREATED, Json(subscription)))
}

/// Unsubscribe from an author
#[utoipa::path(
    delete,
    path = "/api/users/{id}/subscribe",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "Author's user ID")),
    responses(
        (status = 204, description = "Subscription removed"),
        (status = 400, description = "No such subscription", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unsubscribe(
    State(state): State<AppState>,
    session: Session,
    Path(author_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = SessionUserId::get(&session)
        .await?
        .ok_or(AuthError::NotLoggedIn)?;

    SubscriptionService::new(&state.db)
        .unsubscribe(user_id, author_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the authors the logged in user follows
#[utoipa::path(
    get,
    path = "/api/users/subscriptions",
    tag = USER_TAG,
    params(RecipesLimitDto),
    responses(
        (status = 200, description = "Followed authors", body = Vec<SubscriptionDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_subscriptions(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<RecipesLimitDto>,
) -> Result<impl IntoResponse, Error> {
    let user_id = SessionUserId::get(&session)
        .await?
        .ok_or(AuthError::NotLoggedIn)?;

    let subscriptions = SubscriptionService::new(&state.db)
        .list_subscriptions(user_id, query.recipes_limit)
        .await?;

    Ok((StatusCode::OK, Json(subscriptions)))
}
