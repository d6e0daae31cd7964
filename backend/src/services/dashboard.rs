//! Dashboard service
//!
//! Assembles the current-day view: steps, calories consumed, sleep
//! rating, and the estimated calories burned walking. Every value
//! degrades to zero for a user with no entries today.

use crate::error::ApiError;
use crate::services::{FoodService, MeasurementService, SleepService, StepsService};
use chrono::Utc;
use rehealth_shared::calculators::calories_burned;
use rehealth_shared::types::DashboardResponse;
use sqlx::PgPool;
use uuid::Uuid;

/// Dashboard service
pub struct DashboardService;

impl DashboardService {
    /// Current-day values for a user
    pub async fn today(pool: &PgPool, user_id: Uuid) -> Result<DashboardResponse, ApiError> {
        let date = Utc::now().date_naive();

        let steps_today = StepsService::today_total(pool, user_id).await?;
        let calories_consumed_today = FoodService::today_calories(pool, user_id).await?;
        let sleep_rating_today = SleepService::today_rating(pool, user_id).await?;

        // Latest weight drives the walking-calorie estimate; 0 selects
        // the calculator's no-weight fallback constant.
        let weight_kg = MeasurementService::latest_weight_kg(pool, user_id).await?;
        let calories_burned_today = calories_burned(steps_today, weight_kg)?;

        Ok(DashboardResponse {
            date,
            steps_today,
            calories_consumed_today,
            sleep_rating_today,
            calories_burned_today,
        })
    }
}
