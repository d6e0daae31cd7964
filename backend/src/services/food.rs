//! Food tracking service

use crate::error::ApiError;
use crate::repositories::{CreateFoodLog, FoodRepository};
use chrono::Utc;
use rehealth_shared::types::FoodLogResponse;
use rehealth_shared::validation::{validate_food_calories, validate_food_name, validate_meal_type};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

/// Food tracking service
pub struct FoodService;

impl FoodService {
    /// Log a food entry for today
    pub async fn log_food(
        pool: &PgPool,
        user_id: Uuid,
        food_name: &str,
        calories: i64,
        meal_type: &str,
    ) -> Result<FoodLogResponse, ApiError> {
        validate_food_name(food_name).map_err(ApiError::Validation)?;
        validate_food_calories(calories).map_err(ApiError::Validation)?;
        validate_meal_type(meal_type).map_err(ApiError::Validation)?;

        let record = FoodRepository::create(
            pool,
            CreateFoodLog {
                user_id,
                consumed_on: Utc::now().date_naive(),
                food_name: food_name.trim().to_string(),
                calories,
                meal_type: meal_type.to_lowercase(),
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        info!(user_id = %user_id, calories = record.calories, "food entry logged");

        Ok(FoodLogResponse {
            id: record.id.to_string(),
            consumed_on: record.consumed_on,
            food_name: record.food_name,
            calories: record.calories,
            meal_type: record.meal_type,
        })
    }

    /// Total calories consumed today (0 for a user with no entries)
    pub async fn today_calories(pool: &PgPool, user_id: Uuid) -> Result<i64, ApiError> {
        FoodRepository::calories_for_date(pool, user_id, Utc::now().date_naive())
            .await
            .map_err(ApiError::Internal)
    }
}
