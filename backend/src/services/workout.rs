//! Workout tracking service

use crate::error::ApiError;
use crate::repositories::{CreateWorkoutLog, WorkoutLogRecord, WorkoutRepository};
use chrono::Utc;
use rehealth_shared::types::WorkoutLogResponse;
use rehealth_shared::validation::{
    validate_exercise_name, validate_lifted_weight, validate_reps, validate_sets,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

/// Workout tracking service
pub struct WorkoutService;

impl WorkoutService {
    /// Log a resistance-training session for today
    pub async fn log_workout(
        pool: &PgPool,
        user_id: Uuid,
        exercise_name: &str,
        weight_kg: f64,
        sets: i32,
        reps: i32,
    ) -> Result<WorkoutLogResponse, ApiError> {
        validate_exercise_name(exercise_name).map_err(ApiError::Validation)?;
        validate_lifted_weight(weight_kg).map_err(ApiError::Validation)?;
        validate_sets(sets).map_err(ApiError::Validation)?;
        validate_reps(reps).map_err(ApiError::Validation)?;

        let record = WorkoutRepository::create(
            pool,
            CreateWorkoutLog {
                user_id,
                performed_on: Utc::now().date_naive(),
                exercise_name: exercise_name.trim().to_string(),
                weight_kg: Decimal::try_from(weight_kg).unwrap_or_default(),
                sets,
                reps,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        info!(user_id = %user_id, exercise = %record.exercise_name, "workout entry logged");

        Ok(Self::record_to_response(record))
    }

    /// All workout entries for a user, most recent first
    pub async fn history(pool: &PgPool, user_id: Uuid) -> Result<Vec<WorkoutLogResponse>, ApiError> {
        let records = WorkoutRepository::get_all(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(Self::record_to_response).collect())
    }

    /// Session volume: weight * sets * reps
    pub fn session_volume_kg(weight_kg: f64, sets: i32, reps: i32) -> f64 {
        weight_kg * sets as f64 * reps as f64
    }

    fn record_to_response(record: WorkoutLogRecord) -> WorkoutLogResponse {
        let weight_kg = record.weight_kg.to_f64().unwrap_or(0.0);
        WorkoutLogResponse {
            id: record.id.to_string(),
            performed_on: record.performed_on,
            exercise_name: record.exercise_name,
            weight_kg,
            sets: record.sets,
            reps: record.reps,
            volume_kg: Self::session_volume_kg(weight_kg, record.sets, record.reps),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_volume() {
        // 60kg x 3 sets x 10 reps
        assert_eq!(WorkoutService::session_volume_kg(60.0, 3, 10), 1800.0);
    }

    #[test]
    fn test_session_volume_single_set() {
        assert_eq!(WorkoutService::session_volume_kg(100.0, 1, 1), 100.0);
    }
}
