//! Step tracking service

use crate::error::ApiError;
use crate::repositories::{CreateStepLog, StepsRepository};
use chrono::Utc;
use rehealth_shared::types::StepLogResponse;
use rehealth_shared::validation::{validate_step_count, validate_step_goal};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

/// Standard daily step goal applied when the user doesn't set one.
pub const DEFAULT_STEP_GOAL: i64 = 10_000;

/// Step tracking service
pub struct StepsService;

impl StepsService {
    /// Log a step entry for today
    ///
    /// Multiple entries per day are allowed; reads aggregate them by
    /// summation.
    pub async fn log_steps(
        pool: &PgPool,
        user_id: Uuid,
        step_count: i64,
        step_goal: Option<i64>,
    ) -> Result<StepLogResponse, ApiError> {
        validate_step_count(step_count).map_err(ApiError::Validation)?;
        let step_goal = step_goal.unwrap_or(DEFAULT_STEP_GOAL);
        validate_step_goal(step_goal).map_err(ApiError::Validation)?;

        let record = StepsRepository::create(
            pool,
            CreateStepLog {
                user_id,
                log_date: Utc::now().date_naive(),
                step_count,
                step_goal,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        info!(user_id = %user_id, steps = record.step_count, "step entry logged");

        Ok(StepLogResponse {
            id: record.id.to_string(),
            log_date: record.log_date,
            step_count: record.step_count,
            step_goal: record.step_goal,
            goal_reached: record.step_count >= record.step_goal,
        })
    }

    /// Total steps logged today (0 for a user with no entries)
    pub async fn today_total(pool: &PgPool, user_id: Uuid) -> Result<i64, ApiError> {
        StepsRepository::total_for_date(pool, user_id, Utc::now().date_naive())
            .await
            .map_err(ApiError::Internal)
    }
}
