//! API request and response types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// Users
// ============================================================================

/// Request to provision a user identity row
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 20, message = "Username must be 1-20 characters"))]
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Logging requests
// ============================================================================

/// Request to log a day's steps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogStepsRequest {
    pub step_count: i64,
    /// Defaults to the standard 10,000-step goal when omitted
    pub step_goal: Option<i64>,
}

/// Request to log last night's sleep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSleepRequest {
    pub duration_hours: f64,
    pub quality: f64,
}

/// Request to log a food entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogFoodRequest {
    pub food_name: String,
    pub calories: i64,
    pub meal_type: String,
}

/// Request to log a workout session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogWorkoutRequest {
    pub exercise_name: String,
    pub weight_kg: f64,
    pub sets: i32,
    pub reps: i32,
}

/// Request to log a body measurement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogMeasurementRequest {
    pub height_cm: f64,
    pub weight_kg: f64,
}

// ============================================================================
// Logging responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepLogResponse {
    pub id: String,
    pub log_date: NaiveDate,
    pub step_count: i64,
    pub step_goal: i64,
    pub goal_reached: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepLogResponse {
    pub id: String,
    pub sleep_date: NaiveDate,
    pub duration_hours: f64,
    pub quality: f64,
    /// Derived rating in [0, 1], computed at log time
    pub rating: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodLogResponse {
    pub id: String,
    pub consumed_on: NaiveDate,
    pub food_name: String,
    pub calories: i64,
    pub meal_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutLogResponse {
    pub id: String,
    pub performed_on: NaiveDate,
    pub exercise_name: String,
    pub weight_kg: f64,
    pub sets: i32,
    pub reps: i32,
    /// Derived session volume: weight * sets * reps
    pub volume_kg: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementResponse {
    pub id: String,
    pub measured_on: NaiveDate,
    pub height_cm: f64,
    pub weight_kg: f64,
}

// ============================================================================
// Read models
// ============================================================================

/// Current-day values for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub date: NaiveDate,
    pub steps_today: i64,
    pub calories_consumed_today: i64,
    /// Sleep rating in [0, 1]; 0 when nothing was logged today
    pub sleep_rating_today: f64,
    /// Estimated kcal burned walking today, from steps and latest weight
    pub calories_burned_today: f64,
}

/// A 7-day dense trend series for one metric
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendResponse {
    pub metric: String,
    /// Chart axis title for the value series
    pub axis_label: String,
    /// MM/DD labels, ascending, one per day
    pub labels: Vec<String>,
    /// Sequential day numbers 1..=N for numeric plotting
    pub indices: Vec<u32>,
    /// One value per day, zero-filled
    pub values: Vec<f64>,
}

/// Lifetime totals plus score, rank, and progress
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementsResponse {
    pub total_steps: i64,
    pub total_sleep_hours: f64,
    pub total_weight_lifted_kg: f64,
    pub total_calories: i64,
    pub score: u64,
    pub rank: String,
    pub next_rank: Option<String>,
    pub progress_percent: f64,
}

/// BMI report from the latest measurement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyReportResponse {
    pub measured_on: NaiveDate,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub bmi: f64,
    pub category: String,
}
