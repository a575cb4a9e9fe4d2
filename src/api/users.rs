//! User record endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Path, ValidatedJson};
use crate::domain::{UserId, UserRequest, UserResponse};

/// Routes under `/user`
pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/user", post(create_user))
        .route("/user/all", get(list_users))
        .route(
            "/user/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// POST /user
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(name = %request.name, surname = %request.surname, "Creating user");

    let user = state.user_service.create(request).await?;

    Ok(Json(user))
}

/// GET /user/all
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    debug!("Listing all users");

    let users = state.user_service.get_all().await?;

    Ok(Json(users))
}

/// GET /user/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(%id, "Getting user");

    let user = state.user_service.get_by_id(id).await?;

    Ok(Json(user))
}

/// PUT /user/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    ValidatedJson(request): ValidatedJson<UserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(%id, "Updating user");

    let user = state.user_service.update(id, request).await?;

    Ok(Json(user))
}

/// DELETE /user/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<StatusCode, ApiError> {
    debug!(%id, "Deleting user");

    state.user_service.delete_by_id(id).await?;

    Ok(StatusCode::OK)
}
