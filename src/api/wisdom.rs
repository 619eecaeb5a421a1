//! Wisdom endpoints
//!
//! - `GET /`: service banner
//! - `POST /ask`: run the full pipeline and return the final result

use axum::{routing::get, routing::post, Extension, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;
use wisdomarc_core::{Context, WisdomCoordinator, WisdomResult};

use super::ApiError;

/// Reported in every response's metadata
pub const SYSTEM_VERSION: &str = "WisdomArc 2.0";
/// Reasoning framework label
pub const FRAMEWORK: &str = "System 1.5 Metacognitive";

/// Body of `POST /ask`
#[derive(Debug, Default, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub context: Option<Context>,
    #[serde(default)]
    pub user_preferences: Option<Context>,
}

impl AskRequest {
    /// Context handed to the coordinator: caller context, then preferences,
    /// then the batch-mode markers
    pub fn combined_context(&self) -> Context {
        let mut combined = self.context.clone().unwrap_or_default();
        if let Some(preferences) = &self.user_preferences {
            combined.extend(preferences.clone());
        }
        combined.insert("processing_mode".to_string(), json!("batch"));
        combined.insert("enhancement_level".to_string(), json!("comprehensive"));
        combined
    }
}

/// Metadata appended to every `/ask` result
#[derive(Debug, Serialize)]
pub struct ResponseMetadata {
    pub processing_time: DateTime<Utc>,
    pub system_version: &'static str,
    pub framework: &'static str,
}

/// Response of `POST /ask`
#[derive(Debug, Serialize)]
pub struct AskResponse {
    #[serde(flatten)]
    pub result: WisdomResult,
    pub response_metadata: ResponseMetadata,
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "WisdomArc - Multi-Agent Philosophical Reasoning",
        "version": env!("CARGO_PKG_VERSION"),
        "framework": FRAMEWORK,
        "endpoints": {
            "POST /ask": "Get comprehensive philosophical wisdom (batch mode)",
            "WebSocket /ws/{session_id}": "Real-time streaming reasoning",
            "GET /agents": "List available philosophical agents",
            "GET /health": "System health check"
        }
    }))
}

async fn ask(
    Extension(coordinator): Extension<WisdomCoordinator>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    let context = request.combined_context();
    let result = coordinator.ask_wisdom(&request.text, context).await?;

    info!(
        request_id = %result.request_id,
        agents = result.philosophers_consulted.len(),
        duration_ms = result.processing_time_ms,
        "Wisdom generated"
    );

    Ok(Json(AskResponse {
        result,
        response_metadata: ResponseMetadata {
            processing_time: Utc::now(),
            system_version: SYSTEM_VERSION,
            framework: FRAMEWORK,
        },
    }))
}

/// Create wisdom routes
pub fn wisdom_routes() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/ask", post(ask))
}
