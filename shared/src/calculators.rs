//! Single-sample metric calculators
//!
//! Pure functions converting raw logged values into derived metrics:
//! BMI and its category, calories burned walking, and the sleep rating.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: no side effects, no I/O
//! 2. **Fail Fast**: out-of-domain input returns `InvalidMeasurement`
//!    instead of producing a silently corrupted value
//! 3. **Stable Rounding**: results are rounded to fixed decimal places so
//!    display and tests agree exactly

use crate::errors::MetricError;
use serde::{Deserialize, Serialize};

/// Average walking stride length in meters.
const STRIDE_METERS: f64 = 0.78;

/// Calories burned per km for users with no recorded weight.
const FALLBACK_KCAL_PER_KM: f64 = 50.0;

// ============================================================================
// BMI
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Healthy,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Get the BMI interval for this category (upper bound exclusive)
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, 18.5),
            BmiCategory::Healthy => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::Obese => (30.0, f64::INFINITY),
        }
    }

    /// Get a human-readable label
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Healthy => "Healthy",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Calculate BMI from weight and height, rounded to 1 decimal place
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn bmi(weight_kg: f64, height_cm: f64) -> Result<f64, MetricError> {
    if !weight_kg.is_finite() || !height_cm.is_finite() {
        return Err(MetricError::invalid("Weight and height must be numeric"));
    }
    if height_cm <= 0.0 {
        return Err(MetricError::invalid("Height must be greater than zero"));
    }
    if weight_kg < 0.0 {
        return Err(MetricError::invalid("Weight cannot be negative"));
    }

    let height_m = height_cm / 100.0;
    let value = weight_kg / (height_m * height_m);
    Ok((value * 10.0).round() / 10.0)
}

/// Classify a BMI value into its category
///
/// Boundaries are exclusive on the upper side of each bucket, so exactly
/// 18.5 is Healthy.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Healthy
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

// ============================================================================
// Calories burned walking
// ============================================================================

/// Estimate calories burned walking, rounded to 2 decimal places
///
/// Distance is `steps * 0.78` meters. A user with no recorded weight
/// (`weight_kg == 0`) burns a flat 50 kcal/km; otherwise 1 kcal per kg
/// per km.
pub fn calories_burned(steps: i64, weight_kg: f64) -> Result<f64, MetricError> {
    if steps < 0 {
        return Err(MetricError::invalid("Step count cannot be negative"));
    }
    if !weight_kg.is_finite() || weight_kg < 0.0 {
        return Err(MetricError::invalid(
            "Weight must be a non-negative number",
        ));
    }

    let distance_km = steps as f64 * STRIDE_METERS / 1000.0;
    let calories = if weight_kg == 0.0 {
        distance_km * FALLBACK_KCAL_PER_KM
    } else {
        weight_kg * distance_km
    };

    Ok((calories * 100.0).round() / 100.0)
}

// ============================================================================
// Sleep rating
// ============================================================================

/// Calculate a sleep rating in [0, 1] from duration and subjective quality
///
/// The duration component scores 1.0 for 7-9 hours, ramps linearly
/// (`duration / 7`) below 7, and loses 0.1 per hour over 9 with a floor of
/// 0.7. The floor is intentional: oversleeping is penalized mildly and the
/// penalty never exceeds it, so even 24 hours scores 0.7, not a negative
/// value. The quality component is `quality / 5`.
///
/// Final rating = `0.6 * duration_component + 0.4 * quality_component`.
pub fn sleep_rating(duration_hours: f64, quality: f64) -> Result<f64, MetricError> {
    if !duration_hours.is_finite() || duration_hours < 0.0 || duration_hours > 24.0 {
        return Err(MetricError::invalid(
            "Sleep duration must be between 0 and 24 hours",
        ));
    }
    if !quality.is_finite() || quality < 1.0 || quality > 5.0 {
        return Err(MetricError::invalid(
            "Sleep quality must be between 1 and 5",
        ));
    }

    let duration_component = if (7.0..=9.0).contains(&duration_hours) {
        1.0
    } else if duration_hours < 7.0 {
        duration_hours / 7.0
    } else {
        (1.0 - (duration_hours - 9.0) * 0.1).max(0.7)
    };

    let quality_component = quality / 5.0;

    Ok(0.6 * duration_component + 0.4 * quality_component)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // =========================================================================
    // BMI Tests
    // =========================================================================

    #[test]
    fn test_bmi_known_value() {
        // 70kg, 175cm -> 22.9 after rounding to 1 decimal
        assert_eq!(bmi(70.0, 175.0).unwrap(), 22.9);
    }

    #[test]
    fn test_bmi_invalid_height() {
        assert!(bmi(70.0, 0.0).is_err());
        assert!(bmi(70.0, -175.0).is_err());
    }

    #[test]
    fn test_bmi_non_numeric_input() {
        assert!(bmi(f64::NAN, 175.0).is_err());
        assert!(bmi(70.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_bmi_category_boundaries() {
        assert_eq!(classify_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(classify_bmi(18.5), BmiCategory::Healthy);
        assert_eq!(classify_bmi(22.9), BmiCategory::Healthy);
        assert_eq!(classify_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(classify_bmi(30.0), BmiCategory::Obese);
        assert_eq!(classify_bmi(42.0), BmiCategory::Obese);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: BMI is positive and finite for valid inputs
        #[test]
        fn prop_bmi_positive(weight in 20.0f64..500.0, height in 100.0f64..250.0) {
            let value = bmi(weight, height).unwrap();
            prop_assert!(value > 0.0 && value.is_finite());
        }

        /// Property: heavier weight never lowers BMI at the same height
        #[test]
        fn prop_bmi_monotone_in_weight(
            weight in 50.0f64..100.0,
            delta in 1.0f64..50.0,
            height in 150.0f64..200.0
        ) {
            let lighter = bmi(weight, height).unwrap();
            let heavier = bmi(weight + delta, height).unwrap();
            prop_assert!(heavier >= lighter);
        }

        /// Property: classification agrees with the category's own range
        #[test]
        fn prop_classification_matches_range(value in 10.0f64..50.0) {
            let category = classify_bmi(value);
            let (lower, upper) = category.range();
            prop_assert!(value >= lower && value < upper);
        }
    }

    // =========================================================================
    // Calories Burned Tests
    // =========================================================================

    #[test]
    fn test_calories_burned_fallback_weight() {
        // 10,000 steps = 7.8km; no weight recorded -> 50 kcal/km
        assert_eq!(calories_burned(10_000, 0.0).unwrap(), 390.0);
    }

    #[test]
    fn test_calories_burned_with_weight() {
        // 70kg over 7.8km at 1 kcal/kg/km
        assert_eq!(calories_burned(10_000, 70.0).unwrap(), 546.0);
    }

    #[test]
    fn test_calories_burned_zero_steps() {
        assert_eq!(calories_burned(0, 70.0).unwrap(), 0.0);
        assert_eq!(calories_burned(0, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_calories_burned_rejects_negative() {
        assert!(calories_burned(-1, 70.0).is_err());
        assert!(calories_burned(1000, -5.0).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: never negative for non-negative inputs
        #[test]
        fn prop_calories_non_negative(steps in 0i64..200_000, weight in 0.0f64..500.0) {
            let kcal = calories_burned(steps, weight).unwrap();
            prop_assert!(kcal >= 0.0);
        }

        /// Property: more steps never burn fewer calories
        #[test]
        fn prop_calories_monotone_in_steps(
            steps in 0i64..100_000,
            extra in 1i64..100_000,
            weight in 0.0f64..500.0
        ) {
            let fewer = calories_burned(steps, weight).unwrap();
            let more = calories_burned(steps + extra, weight).unwrap();
            prop_assert!(more >= fewer);
        }
    }

    // =========================================================================
    // Sleep Rating Tests
    // =========================================================================

    #[test]
    fn test_sleep_rating_ideal_range() {
        // 7-9 hours scores a full duration component
        assert_eq!(sleep_rating(8.0, 5.0).unwrap(), 1.0);
        assert_eq!(sleep_rating(7.0, 5.0).unwrap(), 1.0);
        assert_eq!(sleep_rating(9.0, 5.0).unwrap(), 1.0);
    }

    #[test]
    fn test_sleep_rating_short_sleep_ramps() {
        // 3.5 hours: duration component 0.5
        let rating = sleep_rating(3.5, 5.0).unwrap();
        assert!((rating - (0.6 * 0.5 + 0.4)).abs() < 1e-9);
    }

    #[test]
    fn test_sleep_rating_oversleep_penalty() {
        // 10 hours: component 0.9
        let rating = sleep_rating(10.0, 5.0).unwrap();
        assert!((rating - (0.6 * 0.9 + 0.4)).abs() < 1e-9);
    }

    #[test]
    fn test_sleep_rating_oversleep_floor() {
        // Without the floor, 20h would give 1.0 - 1.1 = -0.1
        let rating = sleep_rating(20.0, 5.0).unwrap();
        assert!((rating - 0.82).abs() < 1e-9);

        // 24 hours still clamps to the same floor
        let extreme = sleep_rating(24.0, 5.0).unwrap();
        assert!((extreme - 0.82).abs() < 1e-9);
    }

    #[test]
    fn test_sleep_rating_quality_out_of_domain() {
        assert!(sleep_rating(8.0, 0.0).is_err());
        assert!(sleep_rating(8.0, 6.0).is_err());
        assert!(sleep_rating(25.0, 3.0).is_err());
        assert!(sleep_rating(-1.0, 3.0).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: rating always lands in [0, 1]
        #[test]
        fn prop_sleep_rating_bounded(duration in 0.0f64..24.0, quality in 1.0f64..5.0) {
            let rating = sleep_rating(duration, quality).unwrap();
            prop_assert!((0.0..=1.0).contains(&rating),
                "rating {} out of bounds for duration={}, quality={}",
                rating, duration, quality);
        }

        /// Property: better quality never lowers the rating
        #[test]
        fn prop_sleep_rating_monotone_in_quality(
            duration in 0.0f64..24.0,
            quality in 1.0f64..4.0,
            bump in 0.1f64..1.0
        ) {
            let base = sleep_rating(duration, quality).unwrap();
            let better = sleep_rating(duration, quality + bump).unwrap();
            prop_assert!(better >= base);
        }
    }
}
