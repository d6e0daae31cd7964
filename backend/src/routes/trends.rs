//! Trend chart routes

use crate::error::ApiError;
use crate::services::{TrendMetric, TrendService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use rehealth_shared::types::TrendResponse;
use uuid::Uuid;

/// GET /api/v1/users/:user_id/trends/:metric - 7-day dense window
///
/// `metric` is one of steps | calories | sleep.
pub async fn get_trend(
    State(state): State<AppState>,
    Path((user_id, metric)): Path<(Uuid, String)>,
) -> Result<Json<TrendResponse>, ApiError> {
    let metric = TrendMetric::parse(&metric).ok_or_else(|| {
        ApiError::BadRequest(format!(
            "Unknown trend metric '{}': expected steps, calories, or sleep",
            metric
        ))
    })?;

    let trend = TrendService::seven_day_window(state.db(), user_id, metric).await?;
    Ok(Json(trend))
}
