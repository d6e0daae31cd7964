//! Sleep log repository for database operations

use super::DailyValueRow;
use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Sleep log record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SleepLogRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub sleep_date: NaiveDate,
    pub duration_hours: Decimal,
    pub quality: Decimal,
    pub rating: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a sleep log
#[derive(Debug, Clone)]
pub struct CreateSleepLog {
    pub user_id: Uuid,
    pub sleep_date: NaiveDate,
    pub duration_hours: Decimal,
    pub quality: Decimal,
    pub rating: Decimal,
}

/// Sleep log repository
pub struct SleepRepository;

impl SleepRepository {
    /// Create a new sleep log entry
    pub async fn create(pool: &PgPool, input: CreateSleepLog) -> Result<SleepLogRecord> {
        let record = sqlx::query_as::<_, SleepLogRecord>(
            r#"
            INSERT INTO sleep_logs (user_id, sleep_date, duration_hours, quality, rating)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, sleep_date, duration_hours, quality, rating, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(input.sleep_date)
        .bind(input.duration_hours)
        .bind(input.quality)
        .bind(input.rating)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// The sleep rating recorded for a single date, if any.
    /// With multiple rows for the date, the most recently logged wins.
    pub async fn rating_for_date(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<f64>> {
        let row: Option<(f64,)> = sqlx::query_as(
            r#"
            SELECT rating::float8
            FROM sleep_logs
            WHERE user_id = $1 AND sleep_date = $2
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_optional(pool)
        .await?;

        Ok(row.map(|r| r.0))
    }

    /// Per-day sleep durations within a date range, ascending by date
    /// then by log time, so the latest same-day entry lands last.
    pub async fn daily_durations(
        pool: &PgPool,
        user_id: Uuid,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<Vec<DailyValueRow>> {
        let rows = sqlx::query_as::<_, DailyValueRow>(
            r#"
            SELECT sleep_date AS day, duration_hours::float8 AS value
            FROM sleep_logs
            WHERE user_id = $1 AND sleep_date >= $2 AND sleep_date <= $3
            ORDER BY sleep_date ASC, created_at ASC
            "#,
        )
        .bind(user_id)
        .bind(date_from)
        .bind(date_to)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// All-time hours slept (0 on empty history)
    pub async fn lifetime_hours(pool: &PgPool, user_id: Uuid) -> Result<f64> {
        let total: (f64,) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(duration_hours), 0)::float8
            FROM sleep_logs
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(total.0)
    }
}
