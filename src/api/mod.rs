//! Web API module for WisdomArc
//!
//! Provides REST API endpoints for:
//! - Wisdom requests (`POST /ask`) and the service banner (`GET /`)
//! - Persona and collaboration pattern listing
//! - Sample queries (`GET /reasoning-demo`)
//! - Health checks

pub mod agents;
pub mod demo;
pub mod error;
pub mod health;
pub mod wisdom;

use axum::{Extension, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use wisdomarc_core::WisdomCoordinator;

pub use agents::agents_routes;
pub use demo::demo_routes;
pub use error::ApiError;
pub use health::health_routes;
pub use wisdom::wisdom_routes;

/// Create the full application router: REST endpoints plus WebSocket routes
pub fn app_router(coordinator: WisdomCoordinator) -> Router {
    Router::new()
        .merge(wisdom_routes())
        .merge(agents_routes())
        .merge(demo_routes())
        .merge(health_routes())
        .merge(crate::websocket::websocket_router())
        .layer(Extension(coordinator))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests;
