//! Body measurement service
//!
//! Logging of height/weight pairs and the BMI report derived from the
//! most recent measurement.

use crate::error::ApiError;
use crate::repositories::{CreateMeasurement, MeasurementRepository};
use chrono::Utc;
use rehealth_shared::calculators::{bmi, classify_bmi};
use rehealth_shared::types::{BodyReportResponse, MeasurementResponse};
use rehealth_shared::validation::{validate_body_weight, validate_height};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

/// Body measurement service
pub struct MeasurementService;

impl MeasurementService {
    /// Log a body measurement for today
    pub async fn log_measurement(
        pool: &PgPool,
        user_id: Uuid,
        height_cm: f64,
        weight_kg: f64,
    ) -> Result<MeasurementResponse, ApiError> {
        validate_height(height_cm).map_err(ApiError::Validation)?;
        validate_body_weight(weight_kg).map_err(ApiError::Validation)?;

        let record = MeasurementRepository::create(
            pool,
            CreateMeasurement {
                user_id,
                measured_on: Utc::now().date_naive(),
                height_cm: Decimal::try_from(height_cm).unwrap_or_default(),
                weight_kg: Decimal::try_from(weight_kg).unwrap_or_default(),
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        info!(user_id = %user_id, "measurement logged");

        Ok(MeasurementResponse {
            id: record.id.to_string(),
            measured_on: record.measured_on,
            height_cm: record.height_cm.to_f64().unwrap_or(0.0),
            weight_kg: record.weight_kg.to_f64().unwrap_or(0.0),
        })
    }

    /// BMI report from the latest measurement
    pub async fn body_report(pool: &PgPool, user_id: Uuid) -> Result<BodyReportResponse, ApiError> {
        let record = MeasurementRepository::get_latest(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("No measurements recorded".to_string()))?;

        let height_cm = record.height_cm.to_f64().unwrap_or(0.0);
        let weight_kg = record.weight_kg.to_f64().unwrap_or(0.0);
        let value = bmi(weight_kg, height_cm)?;

        Ok(BodyReportResponse {
            measured_on: record.measured_on,
            height_cm,
            weight_kg,
            bmi: value,
            category: classify_bmi(value).description().to_string(),
        })
    }

    /// The user's most recent weight in kg; 0 when none is recorded.
    /// Feeds the calories-burned estimate, which has a fallback for 0.
    pub async fn latest_weight_kg(pool: &PgPool, user_id: Uuid) -> Result<f64, ApiError> {
        let latest = MeasurementRepository::get_latest(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(latest
            .map(|r| r.weight_kg.to_f64().unwrap_or(0.0))
            .unwrap_or(0.0))
    }
}
