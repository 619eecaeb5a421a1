//! Health check endpoint
//!
//! `/health` reports `healthy` when the model backend answers its probe and
//! `degraded` otherwise. Requests still succeed while degraded, using
//! fallback output.

use axum::{routing::get, Extension, Json, Router};
use serde::Serialize;
use wisdomarc_core::WisdomCoordinator;

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub agents_available: usize,
    pub provider: String,
    pub model: String,
}

async fn health_check(
    Extension(coordinator): Extension<WisdomCoordinator>,
) -> Json<HealthResponse> {
    let gateway = coordinator.gateway();
    let status = if gateway.health_check().await {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        agents_available: coordinator.orchestrator().available_agents().len(),
        provider: gateway.provider_name().to_string(),
        model: gateway.model().to_string(),
    })
}

/// Create health routes
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_check))
}
