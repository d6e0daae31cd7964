//! Route definitions for the ReHealth API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod achievements;
mod dashboard;
mod food;
mod health;
mod measurement;
mod sleep;
mod steps;
mod trends;
mod users;
mod workout;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api/v1", api_routes())
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(|| async {
                axum::Json(serde_json::json!({
                    "name": "ReHealth API",
                    "version": env!("CARGO_PKG_VERSION"),
                }))
            }),
        )
        .route("/users", post(users::create_user))
        .nest("/users/:user_id", user_scoped_routes())
}

/// Routes operating on one user's data; the session layer outside this
/// service is responsible for vouching for the `user_id` it supplies.
fn user_scoped_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(users::get_user))
        .nest("/steps", steps::steps_routes())
        .nest("/sleep", sleep::sleep_routes())
        .nest("/food", food::food_routes())
        .nest("/workouts", workout::workout_routes())
        .nest("/measurements", measurement::measurement_routes())
        .route("/body", get(measurement::get_body_report))
        .route("/dashboard", get(dashboard::get_dashboard))
        .route("/trends/:metric", get(trends::get_trend))
        .route("/achievements", get(achievements::get_achievements))
}
