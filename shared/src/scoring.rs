//! Achievement score engine
//!
//! Reduces a user's lifetime totals to a single comparable integer score.
//! Calories are tracked for display only and never enter the formula.

use crate::errors::MetricError;
use serde::{Deserialize, Serialize};

/// Steps required to earn one raw point.
const STEPS_PER_POINT: f64 = 10_000.0;
/// Sleep hours required to earn one raw point.
const SLEEP_HOURS_PER_POINT: f64 = 8.0;
/// Kilograms lifted required to earn one raw point.
const LIFTED_KG_PER_POINT: f64 = 1_000.0;

// Component weights. The project historically shipped both 0.40/0.30/0.30
// and 0.45/0.45/0.10; this implementation standardizes on the latter and
// these constants are the only place the choice lives.
const WEIGHT_STEPS: f64 = 0.45;
const WEIGHT_SLEEP: f64 = 0.45;
const WEIGHT_LIFTED: f64 = 0.10;

/// All-time totals of a user's logged metrics.
///
/// `weight_lifted_kg` is the sum of per-session `weight * sets * reps`
/// products; no raw volume column exists upstream. Every component
/// degrades to zero on empty history.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LifetimeTotals {
    pub steps: i64,
    pub sleep_hours: f64,
    pub weight_lifted_kg: f64,
    pub calories: i64,
}

/// Compute the weighted achievement score from lifetime totals.
///
/// `score = round((steps/10000 * 0.45 + sleep/8 * 0.45 + lifted/1000 * 0.10) * 100)`
///
/// Totals must be non-negative; a negative total indicates upstream
/// corruption and fails fast rather than producing a bogus score.
pub fn achievement_score(totals: &LifetimeTotals) -> Result<u64, MetricError> {
    if totals.steps < 0 || totals.calories < 0 {
        return Err(MetricError::invalid("Lifetime totals cannot be negative"));
    }
    if !totals.sleep_hours.is_finite() || totals.sleep_hours < 0.0 {
        return Err(MetricError::invalid(
            "Lifetime sleep hours must be a non-negative number",
        ));
    }
    if !totals.weight_lifted_kg.is_finite() || totals.weight_lifted_kg < 0.0 {
        return Err(MetricError::invalid(
            "Lifetime weight lifted must be a non-negative number",
        ));
    }

    let raw = totals.steps as f64 / STEPS_PER_POINT * WEIGHT_STEPS
        + totals.sleep_hours / SLEEP_HOURS_PER_POINT * WEIGHT_SLEEP
        + totals.weight_lifted_kg / LIFTED_KG_PER_POINT * WEIGHT_LIFTED;

    Ok((raw * 100.0).round() as u64)
}
