//! Health check endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use super::state::{AppState, DrawServiceApi};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health - basic health check
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /live - liveness probe
pub async fn live_check() -> StatusCode {
    StatusCode::OK
}

/// GET /ready - readiness probe, verifies the store answers
pub async fn ready_check(State(state): State<AppState>) -> StatusCode {
    match state.draw_service.list_draws().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
