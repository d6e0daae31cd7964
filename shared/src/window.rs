//! Dense trend windows
//!
//! Turns sparse, irregularly-dated raw samples into a fixed-length daily
//! series for charting: one value per calendar day in a trailing range,
//! with 0 substituted for days that have no sample.
//!
//! A day whose metric is genuinely 0 (the user really didn't walk) is
//! indistinguishable from a day with no data; chart consumers expect a
//! plain number per day, so no sentinel is introduced.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Length of the trailing trend window, in days.
pub const TREND_WINDOW_DAYS: usize = 7;

/// A single raw dated sample for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    pub date: NaiveDate,
    pub value: f64,
}

impl MetricSample {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// How samples sharing the same date are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameDayFold {
    /// Additive metrics: steps, calories.
    Sum,
    /// One-entry-per-day metrics: sleep hours. The latest sample wins.
    Replace,
}

/// A gap-filled daily series over a trailing date range.
///
/// Invariant: `labels` and `values` always have exactly the requested
/// window length, in ascending date order, regardless of how many raw
/// samples existed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseWindow {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl DenseWindow {
    /// Build a dense window ending on `reference` (inclusive).
    ///
    /// Samples outside `[reference - window_days + 1, reference]` are
    /// ignored; days without a sample get 0. A caller with zero history
    /// gets a window of zeros, never an error.
    pub fn build(
        samples: &[MetricSample],
        window_days: usize,
        reference: NaiveDate,
        fold: SameDayFold,
    ) -> Self {
        let start = reference - Duration::days(window_days as i64 - 1);

        let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for sample in samples {
            if sample.date < start || sample.date > reference {
                continue;
            }
            match fold {
                SameDayFold::Sum => {
                    *by_date.entry(sample.date).or_insert(0.0) += sample.value;
                }
                SameDayFold::Replace => {
                    by_date.insert(sample.date, sample.value);
                }
            }
        }

        let mut labels = Vec::with_capacity(window_days);
        let mut values = Vec::with_capacity(window_days);
        for offset in 0..window_days {
            let day = start + Duration::days(offset as i64);
            labels.push(day.format("%m/%d").to_string());
            values.push(by_date.get(&day).copied().unwrap_or(0.0));
        }

        Self { labels, values }
    }

    /// Short `MM/DD` labels, one per day, ascending.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// One value per day, ascending, zero-filled.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Companion numeric x-axis: sequential day numbers `1..=N`.
    ///
    /// Always agrees with `labels()` on ordering and with `values()` at
    /// each index.
    pub fn day_indices(&self) -> Vec<u32> {
        (1..=self.values.len() as u32).collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_history_yields_zero_window() {
        let window = DenseWindow::build(&[], 7, date(2025, 8, 7), SameDayFold::Sum);
        assert_eq!(window.len(), 7);
        assert!(window.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_gap_filling_between_first_and_last_day() {
        // Samples on day 1 and day 7 only; days 2-6 must be 0
        let reference = date(2025, 8, 7);
        let samples = vec![
            MetricSample::new(date(2025, 8, 1), 5000.0),
            MetricSample::new(date(2025, 8, 7), 8000.0),
        ];
        let window = DenseWindow::build(&samples, 7, reference, SameDayFold::Sum);
        assert_eq!(window.values()[0], 5000.0);
        assert_eq!(&window.values()[1..6], &[0.0; 5]);
        assert_eq!(window.values()[6], 8000.0);
    }

    #[test]
    fn test_same_day_samples_sum() {
        let reference = date(2025, 8, 7);
        let samples = vec![
            MetricSample::new(date(2025, 8, 5), 3000.0),
            MetricSample::new(date(2025, 8, 5), 4000.0),
        ];
        let window = DenseWindow::build(&samples, 7, reference, SameDayFold::Sum);
        assert_eq!(window.values()[4], 7000.0);
    }

    #[test]
    fn test_same_day_samples_replace_keeps_latest() {
        let reference = date(2025, 8, 7);
        let samples = vec![
            MetricSample::new(date(2025, 8, 5), 6.5),
            MetricSample::new(date(2025, 8, 5), 7.5),
        ];
        let window = DenseWindow::build(&samples, 7, reference, SameDayFold::Replace);
        assert_eq!(window.values()[4], 7.5);
    }

    #[test]
    fn test_samples_outside_range_ignored() {
        let reference = date(2025, 8, 7);
        let samples = vec![
            MetricSample::new(date(2025, 7, 31), 9999.0),
            MetricSample::new(date(2025, 8, 8), 9999.0),
        ];
        let window = DenseWindow::build(&samples, 7, reference, SameDayFold::Sum);
        assert!(window.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_labels_are_month_day_ascending() {
        let window = DenseWindow::build(&[], 7, date(2025, 8, 7), SameDayFold::Sum);
        assert_eq!(
            window.labels(),
            &["08/01", "08/02", "08/03", "08/04", "08/05", "08/06", "08/07"]
        );
    }

    #[test]
    fn test_window_spans_month_boundary() {
        let window = DenseWindow::build(&[], 7, date(2025, 9, 2), SameDayFold::Sum);
        assert_eq!(window.labels()[0], "08/27");
        assert_eq!(window.labels()[6], "09/02");
    }

    #[test]
    fn test_day_indices_agree_with_values() {
        let window = DenseWindow::build(&[], 7, date(2025, 8, 7), SameDayFold::Sum);
        assert_eq!(window.day_indices(), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(window.day_indices().len(), window.values().len());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: the window always has exactly the requested length,
        /// no matter how many raw samples exist
        #[test]
        fn prop_window_length_invariant(
            sample_count in 0usize..50,
            day_offsets in proptest::collection::vec(0i64..30, 0..50),
            values in proptest::collection::vec(0.0f64..10_000.0, 0..50)
        ) {
            let reference = date(2025, 8, 7);
            let samples: Vec<MetricSample> = day_offsets
                .iter()
                .zip(values.iter())
                .take(sample_count)
                .map(|(&off, &v)| MetricSample::new(reference - Duration::days(off), v))
                .collect();

            let window = DenseWindow::build(&samples, 7, reference, SameDayFold::Sum);
            prop_assert_eq!(window.len(), 7);
            prop_assert_eq!(window.labels().len(), 7);
            prop_assert_eq!(window.day_indices().len(), 7);
        }

        /// Property: summing preserves the total of in-range samples
        #[test]
        fn prop_sum_fold_preserves_total(
            day_offsets in proptest::collection::vec(0i64..7, 1..20),
            values in proptest::collection::vec(1.0f64..1000.0, 20)
        ) {
            let reference = date(2025, 8, 7);
            let samples: Vec<MetricSample> = day_offsets
                .iter()
                .zip(values.iter())
                .map(|(&off, &v)| MetricSample::new(reference - Duration::days(off), v))
                .collect();

            let expected: f64 = samples.iter().map(|s| s.value).sum();
            let window = DenseWindow::build(&samples, 7, reference, SameDayFold::Sum);
            let total: f64 = window.values().iter().sum();
            prop_assert!((total - expected).abs() < 1e-6);
        }
    }
}
