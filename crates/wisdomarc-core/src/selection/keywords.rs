//! Keyword fallback selection

use super::types::{AgentSelection, CollaborationPattern, QueryAnalysis, SelectionSource};
use super::MAX_AGENTS;

/// Persona keys and the phrases that point to them, in scan order
const KEYWORDS: &[(&str, &[&str])] = &[
    (
        "marcus",
        &["anxious", "anxiety", "stress", "worry", "control", "overwhelm", "fear", "pressure"],
    ),
    (
        "socrates",
        &["confused", "unclear", "don't understand", "what is", "why", "meaning", "define"],
    ),
    (
        "laotzu",
        &["stuck", "forcing", "force", "struggle", "balance", "flow", "resist"],
    ),
    (
        "aristotle",
        &["decision", "decide", "choice", "analyze", "analysis", "plan", "systematic", "habit"],
    ),
];

/// Agents used to pad short keyword matches
const PADDING: [&str; 2] = ["socrates", "marcus"];

/// Deterministic selection from keywords in the query.
///
/// Matches are collected in scan order, padded to two agents and capped at
/// three. The pattern is always parallel.
#[must_use]
pub fn keyword_selection(query: &str) -> AgentSelection {
    let lowered = query.to_lowercase();

    let mut selected: Vec<String> = KEYWORDS
        .iter()
        .filter(|(_, words)| words.iter().any(|w| lowered.contains(w)))
        .map(|(key, _)| key.to_string())
        .collect();

    for pad in PADDING {
        if selected.len() >= 2 {
            break;
        }
        if !selected.iter().any(|k| k == pad) {
            selected.push(pad.to_string());
        }
    }
    selected.truncate(MAX_AGENTS);

    AgentSelection {
        primary_agent: selected[0].clone(),
        selected_agents: selected,
        collaboration_pattern: CollaborationPattern::Parallel,
        reasoning_depth: "moderate".to_string(),
        selection_rationale: "Keyword-based fallback selection".to_string(),
        expected_synergies: vec!["Complementary perspectives on the same concern".to_string()],
        query_analysis: Some(QueryAnalysis::default()),
        source: SelectionSource::Fallback,
    }
}
