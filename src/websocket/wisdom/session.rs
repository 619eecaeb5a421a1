//! Wisdom WebSocket session management

use axum::extract::ws::{Message, WebSocket};
use futures_util::stream::{self, BoxStream};
use futures_util::{SinkExt, StreamExt};
use tracing::{debug, error, info, warn};
use wisdomarc_core::{Error, WisdomCoordinator, WisdomStep};

use super::protocol::{ClientRequest, ServerMessage};

/// Frames answering one request: an error frame when the query is rejected,
/// otherwise one update per progress event and a completion frame after
/// `integration_complete`.
pub fn reasoning_messages(
    coordinator: &WisdomCoordinator,
    session_id: &str,
    request: ClientRequest,
) -> BoxStream<'static, ServerMessage> {
    let events = match coordinator.stream_wisdom(&request.query, request.context.unwrap_or_default())
    {
        Ok(events) => events,
        Err(Error::InvalidQuery(_)) => {
            return stream::once(async { ServerMessage::error("Query text is required") }).boxed()
        }
        Err(e) => {
            let message = format!("Processing error: {e}");
            return stream::once(async move { ServerMessage::error(message) }).boxed();
        }
    };

    let session_id = session_id.to_string();
    events
        .flat_map(move |event| {
            let finished = event.step == WisdomStep::IntegrationComplete;
            let mut frames = vec![ServerMessage::ReasoningUpdate {
                session_id: session_id.clone(),
                event,
            }];
            if finished {
                frames.push(ServerMessage::complete(&session_id));
            }
            stream::iter(frames)
        })
        .boxed()
}

/// Handle WebSocket connection
pub async fn handle_socket(socket: WebSocket, session_id: String, coordinator: WisdomCoordinator) {
    info!("WebSocket connection established: {}", session_id);

    let (mut sender, mut receiver) = socket.split();

    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                debug!("Received message: {}", text);
                let mut frames = match serde_json::from_str::<ClientRequest>(&text) {
                    Ok(request) => {
                        info!(
                            session_id = %session_id,
                            query_chars = request.query.chars().count(),
                            "WebSocket reasoning request"
                        );
                        reasoning_messages(&coordinator, &session_id, request)
                    }
                    Err(e) => stream::once(async move {
                        ServerMessage::error(format!("Invalid message format: {e}"))
                    })
                    .boxed(),
                };

                while let Some(frame) = frames.next().await {
                    let json = match serde_json::to_string(&frame) {
                        Ok(json) => json,
                        Err(e) => {
                            error!("Failed to serialize frame: {}", e);
                            continue;
                        }
                    };
                    if sender.send(Message::Text(json)).await.is_err() {
                        warn!("WebSocket send failed, closing session {}", session_id);
                        return;
                    }
                }
            }
            Ok(Message::Ping(data)) => {
                if sender.send(Message::Pong(data)).await.is_err() {
                    break;
                }
            }
            Ok(Message::Close(_)) => {
                info!("WebSocket connection closed: {}", session_id);
                break;
            }
            Ok(_) => {}
            Err(e) => {
                warn!("WebSocket error for {}: {}", session_id, e);
                break;
            }
        }
    }

    info!("WebSocket session ended: {}", session_id);
}
