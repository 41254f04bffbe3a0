//! Route definitions.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use ratecast_engine::RateEngine;

use crate::handlers::{self, AppState};

/// Create the API router.
///
/// # Arguments
/// * `engine` - The rate engine
pub fn create_router(engine: Arc<RateEngine>) -> Router {
    let state = Arc::new(AppState { engine });

    Router::new()
        // Health
        .route("/health", get(handlers::health))
        .route("/api/v1/health", get(handlers::health))
        // Loan rate curve
        .route("/api/v1/rate-curve", post(handlers::rate_curve))
        // State
        .with_state(state)
}
