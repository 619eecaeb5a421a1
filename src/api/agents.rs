//! Persona and collaboration pattern listing

use axum::{routing::get, Json, Router};
use serde::Serialize;
use wisdomarc_core::{CollaborationPattern, Pantheon, Persona};

/// One collaboration pattern with its description
#[derive(Debug, Serialize)]
pub struct PatternInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Response of `GET /agents`
#[derive(Debug, Serialize)]
pub struct AgentsResponse {
    pub agents: Vec<&'static Persona>,
    pub collaboration_patterns: Vec<PatternInfo>,
}

/// Build the listing from the built-in pantheon
pub fn agents_listing() -> AgentsResponse {
    AgentsResponse {
        agents: Pantheon::builtin().iter().collect(),
        collaboration_patterns: CollaborationPattern::ALL
            .into_iter()
            .map(|p| PatternInfo {
                name: p.as_str(),
                description: p.description(),
            })
            .collect(),
    }
}

async fn list_agents() -> Json<AgentsResponse> {
    Json(agents_listing())
}

/// Create agent listing routes
pub fn agents_routes() -> Router {
    Router::new().route("/agents", get(list_agents))
}
