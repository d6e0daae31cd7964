//! Dashboard routes

use crate::error::ApiError;
use crate::services::DashboardService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use rehealth_shared::types::DashboardResponse;
use uuid::Uuid;

/// GET /api/v1/users/:user_id/dashboard - Current-day values
pub async fn get_dashboard(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let dashboard = DashboardService::today(state.db(), user_id).await?;
    Ok(Json(dashboard))
}
