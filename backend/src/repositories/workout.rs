//! Workout log repository for database operations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Workout log record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutLogRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub performed_on: NaiveDate,
    pub exercise_name: String,
    pub weight_kg: Decimal,
    pub sets: i32,
    pub reps: i32,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a workout log
#[derive(Debug, Clone)]
pub struct CreateWorkoutLog {
    pub user_id: Uuid,
    pub performed_on: NaiveDate,
    pub exercise_name: String,
    pub weight_kg: Decimal,
    pub sets: i32,
    pub reps: i32,
}

/// Workout log repository
pub struct WorkoutRepository;

impl WorkoutRepository {
    /// Create a new workout log entry
    pub async fn create(pool: &PgPool, input: CreateWorkoutLog) -> Result<WorkoutLogRecord> {
        let record = sqlx::query_as::<_, WorkoutLogRecord>(
            r#"
            INSERT INTO workout_logs (user_id, performed_on, exercise_name, weight_kg, sets, reps)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, performed_on, exercise_name, weight_kg, sets, reps, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(input.performed_on)
        .bind(&input.exercise_name)
        .bind(input.weight_kg)
        .bind(input.sets)
        .bind(input.reps)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// All workout entries for a user, most recent first
    pub async fn get_all(pool: &PgPool, user_id: Uuid) -> Result<Vec<WorkoutLogRecord>> {
        let records = sqlx::query_as::<_, WorkoutLogRecord>(
            r#"
            SELECT id, user_id, performed_on, exercise_name, weight_kg, sets, reps, created_at
            FROM workout_logs
            WHERE user_id = $1
            ORDER BY performed_on DESC, created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// All-time weight lifted: SUM(weight * sets * reps) across sessions.
    /// The product is computed here because no volume column exists.
    pub async fn lifetime_volume_kg(pool: &PgPool, user_id: Uuid) -> Result<f64> {
        let total: (f64,) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(weight_kg * sets * reps), 0)::float8
            FROM workout_logs
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(total.0)
    }
}
