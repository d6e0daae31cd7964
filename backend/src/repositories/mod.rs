//! Database repositories
//!
//! Provides the data access layer. Repositories never catch storage
//! errors; `sqlx::Error` propagates to the route boundary where it is
//! mapped to a 500 response.

pub mod food;
pub mod measurement;
pub mod sleep;
pub mod steps;
pub mod user;
pub mod workout;

pub use food::{CreateFoodLog, FoodLogRecord, FoodRepository};
pub use measurement::{CreateMeasurement, MeasurementRecord, MeasurementRepository};
pub use sleep::{CreateSleepLog, SleepLogRecord, SleepRepository};
pub use steps::{CreateStepLog, StepLogRecord, StepsRepository};
pub use user::{UserRecord, UserRepository};
pub use workout::{CreateWorkoutLog, WorkoutLogRecord, WorkoutRepository};

use chrono::NaiveDate;

/// One day's aggregated value for a metric, as returned by per-day
/// range queries. Values are cast to float8 in SQL so every metric
/// flows through the same dense-window builder.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DailyValueRow {
    pub day: NaiveDate,
    pub value: f64,
}
