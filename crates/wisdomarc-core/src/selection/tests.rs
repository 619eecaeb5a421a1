use super::*;
use crate::gateway::ModelGateway;
use crate::Context;
use serde_json::json;
use std::sync::Arc;
use wisdomarc_llm::MockProvider;

fn selector(provider: MockProvider) -> AgentSelector {
    AgentSelector::new(ModelGateway::new(Arc::new(provider)))
}

#[test]
fn test_keyword_anxiety_and_control() {
    let selection = keyword_selection("I feel anxious and can't control this");

    assert_eq!(selection.selected_agents, vec!["marcus", "socrates"]);
    assert_eq!(selection.primary_agent, "marcus");
    assert_eq!(selection.collaboration_pattern, CollaborationPattern::Parallel);
    assert_eq!(selection.source, SelectionSource::Fallback);
    assert_eq!(selection.selection_rationale, "Keyword-based fallback selection");
}

#[test]
fn test_keyword_stuck_and_overwhelmed() {
    let selection = keyword_selection("I am stuck and overwhelmed");
    assert_eq!(selection.selected_agents, vec!["marcus", "laotzu"]);
}

#[test]
fn test_keyword_no_match_pads() {
    let selection = keyword_selection("Tell me about tea");
    assert_eq!(selection.selected_agents, vec!["socrates", "marcus"]);
    assert_eq!(selection.primary_agent, "socrates");
}

#[test]
fn test_keyword_cap_at_three() {
    let selection =
        keyword_selection("I'm stressed, confused about why I'm stuck, and need to decide");
    assert_eq!(selection.selected_agents, vec!["marcus", "socrates", "laotzu"]);
}

#[test]
fn test_keyword_single_match_padded_without_duplicates() {
    let selection = keyword_selection("What is the meaning of this?");
    assert_eq!(selection.selected_agents, vec!["socrates", "marcus"]);
}

#[test]
fn test_pattern_parse() {
    assert_eq!(
        CollaborationPattern::parse(" Dialectical "),
        Some(CollaborationPattern::Dialectical)
    );
    assert_eq!(CollaborationPattern::parse("round-robin"), None);
}

#[tokio::test]
async fn test_model_selection_with_mixed_entries() {
    let reply = json!({
        "selected_agents": ["Marcus Aurelius", {"lao_tzu": "flow"}, {"name": "aristotle"}, "socrates"],
        "primary_agent": "Lao Tzu",
        "collaboration_pattern": "hierarchical",
        "reasoning": "Anxiety plus resistance",
        "query_analysis": {"emotional_tone": "anxious", "problem_type": "practical", "key_themes": ["control"]}
    })
    .to_string();

    let selection = selector(MockProvider::new().with_default_reply(reply))
        .select("I keep forcing things", &Context::new(), None)
        .await;

    assert_eq!(selection.selected_agents, vec!["laotzu", "marcus", "aristotle"]);
    assert_eq!(selection.primary_agent, "laotzu");
    assert_eq!(selection.collaboration_pattern, CollaborationPattern::Hierarchical);
    assert_eq!(selection.selection_rationale, "Anxiety plus resistance");
    assert_eq!(selection.source, SelectionSource::Model);
    assert_eq!(selection.query_analysis.unwrap().emotional_tone, "anxious");
}

#[tokio::test]
async fn test_model_selection_defaults() {
    let reply = r#"Selection: {"selected_agents": ["socrates", "SOCRATES", "marcus"], "primary_agent": "plato", "collaboration_pattern": "chaotic"}"#;

    let selection = selector(MockProvider::new().with_default_reply(reply))
        .select("hello", &Context::new(), None)
        .await;

    assert_eq!(selection.selected_agents, vec!["socrates", "marcus"]);
    assert_eq!(selection.primary_agent, "socrates");
    assert_eq!(selection.collaboration_pattern, CollaborationPattern::Parallel);
}

#[tokio::test]
async fn test_unknown_agents_use_fallback() {
    let reply = r#"{"selected_agents": ["plato", "kant"]}"#;

    let selection = selector(MockProvider::new().with_default_reply(reply))
        .select("I feel anxious and can't control this", &Context::new(), None)
        .await;

    assert_eq!(selection.source, SelectionSource::Fallback);
    assert!(selection.selected_agents.contains(&"marcus".to_string()));
}

#[tokio::test]
async fn test_unavailable_model_uses_fallback() {
    let provider = MockProvider::failing(wisdomarc_llm::Error::Timeout(100));

    let selection = selector(provider)
        .select("I feel anxious and can't control this", &Context::new(), None)
        .await;

    assert_eq!(selection, keyword_selection("I feel anxious and can't control this"));
}

#[tokio::test]
async fn test_prompt_includes_analysis_and_capabilities() {
    let provider = MockProvider::new();
    let analysis = crate::analysis::CognitiveLoadAnalysis::fallback();

    selector(provider.clone())
        .select("hello", &Context::new(), Some(&analysis))
        .await;

    let request = &provider.requests()[0];
    let prompt = request.prompt_text();
    assert!(prompt.contains("AGENT CAPABILITIES"));
    assert!(prompt.contains("MARCUS AURELIUS (marcus)"));
    assert!(prompt.contains("\"overall_load\""));
    assert_eq!(request.temperature, Some(0.35));
}
