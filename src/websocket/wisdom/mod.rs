//! Wisdom WebSocket module
//!
//! One socket serves any number of requests, one at a time. Each request's
//! progress events are forwarded as they are produced.

pub mod protocol;
pub mod session;

use axum::extract::{ws::WebSocketUpgrade, Path};
use axum::response::IntoResponse;
use axum::Extension;
use wisdomarc_core::WisdomCoordinator;

/// WebSocket upgrade handler
pub async fn wisdom_handler(
    ws: WebSocketUpgrade,
    Path(session_id): Path<String>,
    Extension(coordinator): Extension<WisdomCoordinator>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| session::handle_socket(socket, session_id, coordinator))
}
