//! User provisioning routes

use crate::error::ApiError;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use rehealth_shared::types::{CreateUserRequest, UserResponse};
use uuid::Uuid;
use validator::Validate;

/// POST /api/v1/users - Provision a user identity row
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    req.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let user = UserService::create_user(state.db(), &req.username).await?;

    Ok(Json(UserResponse {
        id: user.id.to_string(),
        username: user.username,
        created_at: user.created_at,
    }))
}

/// GET /api/v1/users/:user_id - Look up a user
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = UserService::get_user(state.db(), user_id).await?;

    Ok(Json(UserResponse {
        id: user.id.to_string(),
        username: user.username,
        created_at: user.created_at,
    }))
}
