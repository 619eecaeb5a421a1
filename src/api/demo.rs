//! Sample queries showing which personas each kind of question draws in

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// One sample query and the council it is expected to convene
#[derive(Debug, Serialize)]
pub struct SampleQuery {
    pub theme: &'static str,
    pub query: &'static str,
    pub expected_agents: &'static [&'static str],
    pub reasoning_focus: &'static str,
}

/// Response of `GET /reasoning-demo`
#[derive(Debug, Serialize)]
pub struct DemoResponse {
    pub message: &'static str,
    pub sample_queries: &'static [SampleQuery],
}

pub const SAMPLE_QUERIES: &[SampleQuery] = &[
    SampleQuery {
        theme: "existential",
        query: "I feel lost and don't know what direction my life should take",
        expected_agents: &["socrates", "aristotle", "marcus"],
        reasoning_focus: "Self-discovery, virtue, practical action",
    },
    SampleQuery {
        theme: "anxiety_management",
        query: "I'm overwhelmed by things I can't control and feel anxious all the time",
        expected_agents: &["marcus", "laotzu"],
        reasoning_focus: "Dichotomy of control and acceptance",
    },
    SampleQuery {
        theme: "decision_complexity",
        query: "I have a difficult choice to make and keep going back and forth",
        expected_agents: &["aristotle", "socrates", "laotzu"],
        reasoning_focus: "Systematic analysis and examined assumptions",
    },
    SampleQuery {
        theme: "relationship_conflict",
        query: "I'm having ongoing conflicts with someone important to me",
        expected_agents: &["laotzu", "aristotle", "marcus"],
        reasoning_focus: "Harmony and virtue ethics",
    },
];

async fn reasoning_demo() -> Json<DemoResponse> {
    Json(DemoResponse {
        message: "WisdomArc reasoning demonstration",
        sample_queries: SAMPLE_QUERIES,
    })
}

/// Create the demo route
pub fn demo_routes() -> Router {
    Router::new().route("/reasoning-demo", get(reasoning_demo))
}
