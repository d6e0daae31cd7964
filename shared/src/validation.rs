//! Input validation functions
//!
//! Bounds checking for logged values, applied by services before anything
//! reaches storage. Validators return a user-facing message on failure.

/// Validate a daily step count
pub fn validate_step_count(steps: i64) -> Result<(), String> {
    if steps < 0 {
        return Err("Step count cannot be negative".to_string());
    }
    if steps > 200_000 {
        return Err("Step count unreasonably high".to_string());
    }
    Ok(())
}

/// Validate a daily step goal
pub fn validate_step_goal(goal: i64) -> Result<(), String> {
    if goal < 1 {
        return Err("Step goal must be at least 1".to_string());
    }
    if goal > 200_000 {
        return Err("Step goal unreasonably high".to_string());
    }
    Ok(())
}

/// Validate sleep duration in hours
pub fn validate_sleep_hours(hours: f64) -> Result<(), String> {
    if hours.is_nan() || hours.is_infinite() {
        return Err("Sleep duration must be a valid number".to_string());
    }
    if hours < 0.0 {
        return Err("Sleep duration cannot be negative".to_string());
    }
    if hours > 24.0 {
        return Err("Sleep duration cannot exceed 24 hours".to_string());
    }
    Ok(())
}

/// Validate a subjective sleep quality rating (1-5)
pub fn validate_sleep_quality(quality: f64) -> Result<(), String> {
    if quality.is_nan() || quality.is_infinite() {
        return Err("Sleep quality must be a valid number".to_string());
    }
    if !(1.0..=5.0).contains(&quality) {
        return Err("Sleep quality must be between 1 and 5".to_string());
    }
    Ok(())
}

/// Validate a food name
pub fn validate_food_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Food name cannot be empty".to_string());
    }
    if name.len() > 50 {
        return Err("Food name too long (max 50 characters)".to_string());
    }
    Ok(())
}

/// Validate a single food entry's calories
pub fn validate_food_calories(calories: i64) -> Result<(), String> {
    if calories < 0 {
        return Err("Calories cannot be negative".to_string());
    }
    if calories > 10_000 {
        return Err("Calories unreasonably high for one entry".to_string());
    }
    Ok(())
}

/// Validate a meal type label
pub fn validate_meal_type(meal_type: &str) -> Result<(), String> {
    match meal_type.to_lowercase().as_str() {
        "breakfast" | "lunch" | "dinner" | "snack" => Ok(()),
        other => Err(format!(
            "Unknown meal type '{}': expected breakfast, lunch, dinner, or snack",
            other
        )),
    }
}

/// Validate an exercise name
pub fn validate_exercise_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Exercise name cannot be empty".to_string());
    }
    if name.len() > 50 {
        return Err("Exercise name too long (max 50 characters)".to_string());
    }
    Ok(())
}

/// Validate the weight lifted in a workout set (kg)
pub fn validate_lifted_weight(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg <= 0.0 {
        return Err("Weight must be greater than zero".to_string());
    }
    if weight_kg > 1_000.0 {
        return Err("Weight unreasonably high".to_string());
    }
    Ok(())
}

/// Validate a set count
pub fn validate_sets(sets: i32) -> Result<(), String> {
    if sets < 1 {
        return Err("Sets must be at least 1".to_string());
    }
    if sets > 100 {
        return Err("Sets unreasonably high".to_string());
    }
    Ok(())
}

/// Validate a rep count
pub fn validate_reps(reps: i32) -> Result<(), String> {
    if reps < 1 {
        return Err("Reps must be at least 1".to_string());
    }
    if reps > 100 {
        return Err("Reps unreasonably high".to_string());
    }
    Ok(())
}

/// Validate a body weight measurement (kg)
pub fn validate_body_weight(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 20.0 {
        return Err("Weight must be at least 20 kg".to_string());
    }
    if weight_kg > 500.0 {
        return Err("Weight must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate a height measurement (cm)
pub fn validate_height(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm < 50.0 {
        return Err("Height must be at least 50 cm".to_string());
    }
    if height_cm > 280.0 {
        return Err("Height must be at most 280 cm".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_step_count_bounds() {
        assert!(validate_step_count(0).is_ok());
        assert!(validate_step_count(10_000).is_ok());
        assert!(validate_step_count(-1).is_err());
        assert!(validate_step_count(200_001).is_err());
    }

    #[test]
    fn test_sleep_hours_bounds() {
        assert!(validate_sleep_hours(0.0).is_ok());
        assert!(validate_sleep_hours(24.0).is_ok());
        assert!(validate_sleep_hours(24.5).is_err());
        assert!(validate_sleep_hours(-0.1).is_err());
        assert!(validate_sleep_hours(f64::NAN).is_err());
    }

    #[test]
    fn test_sleep_quality_bounds() {
        assert!(validate_sleep_quality(1.0).is_ok());
        assert!(validate_sleep_quality(5.0).is_ok());
        assert!(validate_sleep_quality(0.5).is_err());
        assert!(validate_sleep_quality(5.1).is_err());
    }

    #[test]
    fn test_food_calories_bounds() {
        assert!(validate_food_calories(0).is_ok());
        assert!(validate_food_calories(10_000).is_ok());
        assert!(validate_food_calories(10_001).is_err());
        assert!(validate_food_calories(-5).is_err());
    }

    #[rstest]
    #[case("breakfast", true)]
    #[case("Lunch", true)]
    #[case("DINNER", true)]
    #[case("snack", true)]
    #[case("brunch", false)]
    #[case("", false)]
    fn test_meal_types(#[case] meal: &str, #[case] ok: bool) {
        assert_eq!(validate_meal_type(meal).is_ok(), ok);
    }

    #[test]
    fn test_exercise_name() {
        assert!(validate_exercise_name("Bench Press").is_ok());
        assert!(validate_exercise_name("   ").is_err());
        assert!(validate_exercise_name(&"x".repeat(51)).is_err());
    }

    #[test]
    fn test_workout_numbers() {
        assert!(validate_lifted_weight(60.0).is_ok());
        assert!(validate_lifted_weight(0.0).is_err());
        assert!(validate_sets(3).is_ok());
        assert!(validate_sets(0).is_err());
        assert!(validate_reps(12).is_ok());
        assert!(validate_reps(101).is_err());
    }

    #[test]
    fn test_measurement_bounds() {
        assert!(validate_body_weight(70.0).is_ok());
        assert!(validate_body_weight(19.9).is_err());
        assert!(validate_height(175.0).is_ok());
        assert!(validate_height(281.0).is_err());
    }
}
