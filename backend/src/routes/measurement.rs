//! Body measurement routes

use crate::error::ApiError;
use crate::services::MeasurementService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use rehealth_shared::types::{BodyReportResponse, LogMeasurementRequest, MeasurementResponse};
use uuid::Uuid;

/// Create measurement routes
pub fn measurement_routes() -> Router<AppState> {
    Router::new().route("/", post(log_measurement))
}

/// POST /api/v1/users/:user_id/measurements - Log a body measurement
async fn log_measurement(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<LogMeasurementRequest>,
) -> Result<Json<MeasurementResponse>, ApiError> {
    let log =
        MeasurementService::log_measurement(state.db(), user_id, req.height_cm, req.weight_kg)
            .await?;
    Ok(Json(log))
}

/// GET /api/v1/users/:user_id/body - BMI report from the latest measurement
pub async fn get_body_report(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<BodyReportResponse>, ApiError> {
    let report = MeasurementService::body_report(state.db(), user_id).await?;
    Ok(Json(report))
}
