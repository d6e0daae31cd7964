//! Food log repository for database operations

use super::DailyValueRow;
use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Food log record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FoodLogRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub consumed_on: NaiveDate,
    pub food_name: String,
    pub calories: i64,
    pub meal_type: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a food log
#[derive(Debug, Clone)]
pub struct CreateFoodLog {
    pub user_id: Uuid,
    pub consumed_on: NaiveDate,
    pub food_name: String,
    pub calories: i64,
    pub meal_type: String,
}

/// Food log repository
pub struct FoodRepository;

impl FoodRepository {
    /// Create a new food log entry
    pub async fn create(pool: &PgPool, input: CreateFoodLog) -> Result<FoodLogRecord> {
        let record = sqlx::query_as::<_, FoodLogRecord>(
            r#"
            INSERT INTO food_logs (user_id, consumed_on, food_name, calories, meal_type)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, consumed_on, food_name, calories, meal_type, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(input.consumed_on)
        .bind(&input.food_name)
        .bind(input.calories)
        .bind(&input.meal_type)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Total calories consumed on a single date (0 when nothing was logged)
    pub async fn calories_for_date(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<i64> {
        let total: (i64,) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(calories), 0)::bigint
            FROM food_logs
            WHERE user_id = $1 AND consumed_on = $2
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_one(pool)
        .await?;

        Ok(total.0)
    }

    /// Per-day calorie totals within a date range, ascending by date
    pub async fn daily_totals(
        pool: &PgPool,
        user_id: Uuid,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<Vec<DailyValueRow>> {
        let rows = sqlx::query_as::<_, DailyValueRow>(
            r#"
            SELECT consumed_on AS day, SUM(calories)::float8 AS value
            FROM food_logs
            WHERE user_id = $1 AND consumed_on >= $2 AND consumed_on <= $3
            GROUP BY consumed_on
            ORDER BY consumed_on ASC
            "#,
        )
        .bind(user_id)
        .bind(date_from)
        .bind(date_to)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// All-time calories consumed (0 on empty history)
    pub async fn lifetime_calories(pool: &PgPool, user_id: Uuid) -> Result<i64> {
        let total: (i64,) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(calories), 0)::bigint
            FROM food_logs
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(total.0)
    }
}
