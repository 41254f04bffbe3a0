//! Request handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tracing::warn;

use ratecast_engine::RateEngine;
use ratecast_traits::RateRequest;

/// Application state.
pub struct AppState {
    /// The rate engine
    pub engine: Arc<RateEngine>,
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Compute the monthly loan rate curve up to the requested maturity.
///
/// Malformed bodies are rejected by the `Json` extractor before this runs.
/// An inverted floor/ceiling pair is flagged but still processed; the clamp
/// pins every result to the ceiling.
pub async fn rate_curve(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RateRequest>,
) -> impl IntoResponse {
    if request.rate_floor > request.rate_ceiling {
        warn!(
            floor = %request.rate_floor,
            ceiling = %request.rate_ceiling,
            "rate floor exceeds ceiling; results will pin to the ceiling"
        );
    }

    match state.engine.rate_curve(&request).await {
        Ok(schedule) => (StatusCode::OK, Json(serde_json::to_value(schedule).unwrap())),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "error": format!("rate curve request failed: {}", e)
            })),
        ),
    }
}
