//! Error types for the ReHealth domain logic

use thiserror::Error;

/// Errors produced by the pure calculation layer.
///
/// Storage-level failures are deliberately absent: repositories surface
/// `sqlx::Error` directly and the backend maps it at the route boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricError {
    /// Input to a calculator was non-finite or outside its domain.
    /// Surfaced to the user as a validation message, never silently
    /// defaulted.
    #[error("Invalid measurement: {0}")]
    InvalidMeasurement(String),
}

impl MetricError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        MetricError::InvalidMeasurement(msg.into())
    }
}
