//! WebSocket module for WisdomArc
//!
//! Provides real-time communication endpoints:
//! - /ws/:session_id - Live progress stream for wisdom requests

pub mod wisdom;

pub use wisdom::wisdom_handler;

use axum::{routing::get, Router};

/// Create the WebSocket router
pub fn websocket_router() -> Router {
    Router::new().route("/ws/:session_id", get(wisdom_handler))
}
