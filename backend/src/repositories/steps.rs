//! Step log repository for database operations

use super::DailyValueRow;
use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Step log record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StepLogRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub log_date: NaiveDate,
    pub step_count: i64,
    pub step_goal: i64,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a step log
#[derive(Debug, Clone)]
pub struct CreateStepLog {
    pub user_id: Uuid,
    pub log_date: NaiveDate,
    pub step_count: i64,
    pub step_goal: i64,
}

/// Step log repository
pub struct StepsRepository;

impl StepsRepository {
    /// Create a new step log entry
    pub async fn create(pool: &PgPool, input: CreateStepLog) -> Result<StepLogRecord> {
        let record = sqlx::query_as::<_, StepLogRecord>(
            r#"
            INSERT INTO step_logs (user_id, log_date, step_count, step_goal)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, log_date, step_count, step_goal, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(input.log_date)
        .bind(input.step_count)
        .bind(input.step_goal)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Total steps recorded on a single date (0 when nothing was logged)
    pub async fn total_for_date(pool: &PgPool, user_id: Uuid, date: NaiveDate) -> Result<i64> {
        let total: (i64,) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(step_count), 0)::bigint
            FROM step_logs
            WHERE user_id = $1 AND log_date = $2
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_one(pool)
        .await?;

        Ok(total.0)
    }

    /// Per-day step totals within a date range, ascending by date.
    /// Days without entries are absent; the caller gap-fills.
    pub async fn daily_totals(
        pool: &PgPool,
        user_id: Uuid,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<Vec<DailyValueRow>> {
        let rows = sqlx::query_as::<_, DailyValueRow>(
            r#"
            SELECT log_date AS day, SUM(step_count)::float8 AS value
            FROM step_logs
            WHERE user_id = $1 AND log_date >= $2 AND log_date <= $3
            GROUP BY log_date
            ORDER BY log_date ASC
            "#,
        )
        .bind(user_id)
        .bind(date_from)
        .bind(date_to)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// All-time step total (0 on empty history)
    pub async fn lifetime_total(pool: &PgPool, user_id: Uuid) -> Result<i64> {
        let total: (i64,) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(step_count), 0)::bigint
            FROM step_logs
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(total.0)
    }
}
