//! Sleep tracking service

use crate::error::ApiError;
use crate::repositories::{CreateSleepLog, SleepRepository};
use chrono::Utc;
use rehealth_shared::calculators::sleep_rating;
use rehealth_shared::types::SleepLogResponse;
use rehealth_shared::validation::{validate_sleep_hours, validate_sleep_quality};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

/// Sleep tracking service
pub struct SleepService;

impl SleepService {
    /// Log last night's sleep for today
    ///
    /// The rating is derived from duration and quality at log time and
    /// stored alongside the raw values so dashboard reads don't have to
    /// recompute it.
    pub async fn log_sleep(
        pool: &PgPool,
        user_id: Uuid,
        duration_hours: f64,
        quality: f64,
    ) -> Result<SleepLogResponse, ApiError> {
        validate_sleep_hours(duration_hours).map_err(ApiError::Validation)?;
        validate_sleep_quality(quality).map_err(ApiError::Validation)?;

        let rating = sleep_rating(duration_hours, quality)?;

        let record = SleepRepository::create(
            pool,
            CreateSleepLog {
                user_id,
                sleep_date: Utc::now().date_naive(),
                duration_hours: Decimal::try_from(duration_hours).unwrap_or_default(),
                quality: Decimal::try_from(quality).unwrap_or_default(),
                rating: Decimal::try_from(rating).unwrap_or_default(),
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        info!(user_id = %user_id, hours = duration_hours, "sleep entry logged");

        Ok(SleepLogResponse {
            id: record.id.to_string(),
            sleep_date: record.sleep_date,
            duration_hours: record.duration_hours.to_f64().unwrap_or(0.0),
            quality: record.quality.to_f64().unwrap_or(0.0),
            rating: record.rating.to_f64().unwrap_or(0.0),
        })
    }

    /// Today's sleep rating in [0, 1]; 0 when nothing was logged
    pub async fn today_rating(pool: &PgPool, user_id: Uuid) -> Result<f64, ApiError> {
        let rating = SleepRepository::rating_for_date(pool, user_id, Utc::now().date_naive())
            .await
            .map_err(ApiError::Internal)?;
        Ok(rating.unwrap_or(0.0))
    }
}
