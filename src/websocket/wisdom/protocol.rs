//! Wisdom WebSocket protocol definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wisdomarc_core::{Context, ProgressEvent};

/// Request frame from the client
#[derive(Debug, Deserialize)]
pub struct ClientRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub context: Option<Context>,
}

/// Frame sent to the client
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// One progress event
    ReasoningUpdate {
        session_id: String,
        #[serde(flatten)]
        event: ProgressEvent,
    },
    /// Sent after `integration_complete`
    ReasoningComplete {
        session_id: String,
        message: String,
        timestamp: DateTime<Utc>,
    },
    /// Rejected request or malformed frame
    Error {
        message: String,
        timestamp: DateTime<Utc>,
    },
}

impl ServerMessage {
    /// Error frame stamped now
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    /// Completion frame stamped now
    pub fn complete(session_id: &str) -> Self {
        Self::ReasoningComplete {
            session_id: session_id.to_string(),
            message: "Philosophical analysis complete".to_string(),
            timestamp: Utc::now(),
        }
    }
}
