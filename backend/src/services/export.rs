//! Workout history export service
//!
//! Renders a user's full workout history as CSV for download.

use crate::error::ApiError;
use crate::repositories::{WorkoutLogRecord, WorkoutRepository};
use crate::services::WorkoutService;
use anyhow::Context;
use rust_decimal::prelude::ToPrimitive;
use sqlx::PgPool;
use uuid::Uuid;

/// Suggested filename for the CSV attachment
pub const WORKOUT_EXPORT_FILENAME: &str = "workout_history.csv";

/// Export service
pub struct ExportService;

impl ExportService {
    /// Render all workout entries for a user as CSV, most recent first
    pub async fn workout_history_csv(pool: &PgPool, user_id: Uuid) -> Result<String, ApiError> {
        let records = WorkoutRepository::get_all(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Self::render_csv(&records).map_err(ApiError::Internal)
    }

    fn render_csv(records: &[WorkoutLogRecord]) -> anyhow::Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["date", "exercise", "weight_kg", "sets", "reps", "volume_kg"])?;

        for record in records {
            let weight_kg = record.weight_kg.to_f64().unwrap_or(0.0);
            let volume = WorkoutService::session_volume_kg(weight_kg, record.sets, record.reps);
            writer.write_record([
                record.performed_on.to_string(),
                record.exercise_name.clone(),
                weight_kg.to_string(),
                record.sets.to_string(),
                record.reps.to_string(),
                volume.to_string(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .context("Failed to flush CSV writer")?;
        String::from_utf8(bytes).context("CSV output was not valid UTF-8")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;

    fn record(date: NaiveDate, exercise: &str, weight: i64, sets: i32, reps: i32) -> WorkoutLogRecord {
        WorkoutLogRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            performed_on: date,
            exercise_name: exercise.to_string(),
            weight_kg: Decimal::from(weight),
            sets,
            reps,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_render_csv_empty_history_has_header_only() {
        let csv = ExportService::render_csv(&[]).unwrap();
        assert_eq!(csv.trim(), "date,exercise,weight_kg,sets,reps,volume_kg");
    }

    #[test]
    fn test_render_csv_includes_computed_volume() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        let records = vec![record(date, "Bench Press", 60, 3, 10)];

        let csv = ExportService::render_csv(&records).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "2025-08-01,Bench Press,60,3,10,1800");
    }

    #[test]
    fn test_render_csv_one_line_per_workout() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        let records = vec![
            record(date, "Squat", 100, 5, 5),
            record(date, "Deadlift", 120, 3, 5),
        ];

        let csv = ExportService::render_csv(&records).unwrap();
        assert_eq!(csv.lines().count(), 3);
    }
}
