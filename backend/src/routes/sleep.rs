//! Sleep tracking routes

use crate::error::ApiError;
use crate::services::SleepService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use rehealth_shared::types::{LogSleepRequest, SleepLogResponse};
use uuid::Uuid;

/// Create sleep routes
pub fn sleep_routes() -> Router<AppState> {
    Router::new().route("/", post(log_sleep))
}

/// POST /api/v1/users/:user_id/sleep - Log last night's sleep
async fn log_sleep(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<LogSleepRequest>,
) -> Result<Json<SleepLogResponse>, ApiError> {
    let log = SleepService::log_sleep(state.db(), user_id, req.duration_hours, req.quality).await?;
    Ok(Json(log))
}
