//! Achievements routes

use crate::error::ApiError;
use crate::services::AchievementService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use rehealth_shared::types::AchievementsResponse;
use uuid::Uuid;

/// GET /api/v1/users/:user_id/achievements - Lifetime totals, score, rank
pub async fn get_achievements(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<AchievementsResponse>, ApiError> {
    let summary = AchievementService::summary(state.db(), user_id).await?;
    Ok(Json(summary))
}
