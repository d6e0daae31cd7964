//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the shared calculation engine.

pub mod achievements;
pub mod dashboard;
pub mod export;
pub mod food;
pub mod measurement;
pub mod sleep;
pub mod steps;
pub mod trends;
pub mod user;
pub mod workout;

pub use achievements::AchievementService;
pub use dashboard::DashboardService;
pub use export::ExportService;
pub use food::FoodService;
pub use measurement::MeasurementService;
pub use sleep::SleepService;
pub use steps::StepsService;
pub use trends::{TrendMetric, TrendService};
pub use user::UserService;
pub use workout::WorkoutService;
