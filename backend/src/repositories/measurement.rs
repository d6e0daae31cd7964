//! Body measurement repository for database operations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Measurement record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MeasurementRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub measured_on: NaiveDate,
    pub height_cm: Decimal,
    pub weight_kg: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a measurement
#[derive(Debug, Clone)]
pub struct CreateMeasurement {
    pub user_id: Uuid,
    pub measured_on: NaiveDate,
    pub height_cm: Decimal,
    pub weight_kg: Decimal,
}

/// Measurement repository
pub struct MeasurementRepository;

impl MeasurementRepository {
    /// Create a new measurement entry
    pub async fn create(pool: &PgPool, input: CreateMeasurement) -> Result<MeasurementRecord> {
        let record = sqlx::query_as::<_, MeasurementRecord>(
            r#"
            INSERT INTO measurements (user_id, measured_on, height_cm, weight_kg)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, measured_on, height_cm, weight_kg, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(input.measured_on)
        .bind(input.height_cm)
        .bind(input.weight_kg)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// The most recent measurement for a user, if any
    pub async fn get_latest(pool: &PgPool, user_id: Uuid) -> Result<Option<MeasurementRecord>> {
        let record = sqlx::query_as::<_, MeasurementRecord>(
            r#"
            SELECT id, user_id, measured_on, height_cm, weight_kg, created_at
            FROM measurements
            WHERE user_id = $1
            ORDER BY measured_on DESC, created_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }
}
