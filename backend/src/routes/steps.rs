//! Step tracking routes

use crate::error::ApiError;
use crate::services::StepsService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use rehealth_shared::types::{LogStepsRequest, StepLogResponse};
use uuid::Uuid;

/// Create step routes
pub fn steps_routes() -> Router<AppState> {
    Router::new().route("/", post(log_steps))
}

/// POST /api/v1/users/:user_id/steps - Log a step entry for today
async fn log_steps(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<LogStepsRequest>,
) -> Result<Json<StepLogResponse>, ApiError> {
    let log = StepsService::log_steps(state.db(), user_id, req.step_count, req.step_goal).await?;
    Ok(Json(log))
}
