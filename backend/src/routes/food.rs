//! Food tracking routes

use crate::error::ApiError;
use crate::services::FoodService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use rehealth_shared::types::{FoodLogResponse, LogFoodRequest};
use uuid::Uuid;

/// Create food routes
pub fn food_routes() -> Router<AppState> {
    Router::new().route("/", post(log_food))
}

/// POST /api/v1/users/:user_id/food - Log a food entry for today
async fn log_food(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<LogFoodRequest>,
) -> Result<Json<FoodLogResponse>, ApiError> {
    let log = FoodService::log_food(
        state.db(),
        user_id,
        &req.food_name,
        req.calories,
        &req.meal_type,
    )
    .await?;
    Ok(Json(log))
}
