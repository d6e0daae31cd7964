//! Seven-day trend service
//!
//! Produces dense, gap-filled daily series for charting. Each chartable
//! metric is an explicit variant carrying its own repository fetch, axis
//! label, and same-day combining rule, dispatched by match.

use crate::error::ApiError;
use crate::repositories::{DailyValueRow, FoodRepository, SleepRepository, StepsRepository};
use chrono::{Duration, NaiveDate, Utc};
use rehealth_shared::types::TrendResponse;
use rehealth_shared::window::{DenseWindow, MetricSample, SameDayFold, TREND_WINDOW_DAYS};
use sqlx::PgPool;
use uuid::Uuid;

/// A metric that can be charted as a 7-day trend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendMetric {
    Steps,
    Calories,
    Sleep,
}

impl TrendMetric {
    /// Parse the metric segment of a trend URL
    pub fn parse(s: &str) -> Option<TrendMetric> {
        match s.to_lowercase().as_str() {
            "steps" => Some(TrendMetric::Steps),
            "calories" => Some(TrendMetric::Calories),
            "sleep" => Some(TrendMetric::Sleep),
            _ => None,
        }
    }

    /// Stable key used in responses
    pub fn key(&self) -> &'static str {
        match self {
            TrendMetric::Steps => "steps",
            TrendMetric::Calories => "calories",
            TrendMetric::Sleep => "sleep",
        }
    }

    /// Chart axis title for the value series
    pub fn axis_label(&self) -> &'static str {
        match self {
            TrendMetric::Steps => "Steps",
            TrendMetric::Calories => "Calories (kcal)",
            TrendMetric::Sleep => "Hours Slept",
        }
    }

    /// How same-day raw entries combine: additive metrics sum, sleep is
    /// one entry per day with the latest winning.
    fn fold(&self) -> SameDayFold {
        match self {
            TrendMetric::Steps | TrendMetric::Calories => SameDayFold::Sum,
            TrendMetric::Sleep => SameDayFold::Replace,
        }
    }

    async fn fetch(
        &self,
        pool: &PgPool,
        user_id: Uuid,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> anyhow::Result<Vec<DailyValueRow>> {
        match self {
            TrendMetric::Steps => {
                StepsRepository::daily_totals(pool, user_id, date_from, date_to).await
            }
            TrendMetric::Calories => {
                FoodRepository::daily_totals(pool, user_id, date_from, date_to).await
            }
            TrendMetric::Sleep => {
                SleepRepository::daily_durations(pool, user_id, date_from, date_to).await
            }
        }
    }
}

/// Seven-day trend service
pub struct TrendService;

impl TrendService {
    /// Dense 7-day window for a metric, ending today
    pub async fn seven_day_window(
        pool: &PgPool,
        user_id: Uuid,
        metric: TrendMetric,
    ) -> Result<TrendResponse, ApiError> {
        Self::window_ending(pool, user_id, metric, Utc::now().date_naive()).await
    }

    /// Dense 7-day window for a metric, ending on `reference`
    pub async fn window_ending(
        pool: &PgPool,
        user_id: Uuid,
        metric: TrendMetric,
        reference: NaiveDate,
    ) -> Result<TrendResponse, ApiError> {
        let start = reference - Duration::days(TREND_WINDOW_DAYS as i64 - 1);
        let rows = metric
            .fetch(pool, user_id, start, reference)
            .await
            .map_err(ApiError::Internal)?;

        let samples: Vec<MetricSample> = rows
            .into_iter()
            .map(|row| MetricSample::new(row.day, row.value))
            .collect();

        let window = DenseWindow::build(&samples, TREND_WINDOW_DAYS, reference, metric.fold());

        Ok(TrendResponse {
            metric: metric.key().to_string(),
            axis_label: metric.axis_label().to_string(),
            labels: window.labels().to_vec(),
            indices: window.day_indices(),
            values: window.values().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("steps", Some(TrendMetric::Steps))]
    #[case("CALORIES", Some(TrendMetric::Calories))]
    #[case("sleep", Some(TrendMetric::Sleep))]
    #[case("weight", None)]
    #[case("", None)]
    fn test_metric_parsing(#[case] input: &str, #[case] expected: Option<TrendMetric>) {
        assert_eq!(TrendMetric::parse(input), expected);
    }

    #[test]
    fn test_fold_rules() {
        assert_eq!(TrendMetric::Steps.fold(), SameDayFold::Sum);
        assert_eq!(TrendMetric::Calories.fold(), SameDayFold::Sum);
        assert_eq!(TrendMetric::Sleep.fold(), SameDayFold::Replace);
    }

    #[test]
    fn test_axis_labels() {
        assert_eq!(TrendMetric::Steps.axis_label(), "Steps");
        assert_eq!(TrendMetric::Sleep.axis_label(), "Hours Slept");
    }
}
