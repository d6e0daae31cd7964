//! Workout tracking routes

use crate::error::ApiError;
use crate::services::{ExportService, WorkoutService};
use crate::services::export::WORKOUT_EXPORT_FILENAME;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use rehealth_shared::types::{LogWorkoutRequest, WorkoutLogResponse};
use uuid::Uuid;

/// Create workout routes
pub fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(log_workout).get(get_history))
        .route("/export", get(export_history))
}

/// POST /api/v1/users/:user_id/workouts - Log a workout session
async fn log_workout(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<LogWorkoutRequest>,
) -> Result<Json<WorkoutLogResponse>, ApiError> {
    let log = WorkoutService::log_workout(
        state.db(),
        user_id,
        &req.exercise_name,
        req.weight_kg,
        req.sets,
        req.reps,
    )
    .await?;
    Ok(Json(log))
}

/// GET /api/v1/users/:user_id/workouts - Full workout history
async fn get_history(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<WorkoutLogResponse>>, ApiError> {
    let history = WorkoutService::history(state.db(), user_id).await?;
    Ok(Json(history))
}

/// GET /api/v1/users/:user_id/workouts/export - Workout history as CSV
async fn export_history(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let csv = ExportService::workout_history_csv(state.db(), user_id).await?;

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", WORKOUT_EXPORT_FILENAME),
        ),
    ];

    Ok((headers, csv))
}
