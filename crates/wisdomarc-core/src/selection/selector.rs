//! Model-backed agent selector

use super::keywords::keyword_selection;
use super::types::{AgentSelection, CollaborationPattern, QueryAnalysis, SelectionSource};
use super::MAX_AGENTS;
use crate::analysis::CognitiveLoadAnalysis;
use crate::extract::{extract_json_object, list_field, text_field};
use crate::gateway::{ModelGateway, StageSettings};
use crate::pantheon::Pantheon;
use crate::Context;
use serde_json::{Map, Value};
use tracing::{info, warn};
use wisdomarc_llm::Message;

/// Chooses agents and collaboration pattern for a query
#[derive(Debug, Clone)]
pub struct AgentSelector {
    gateway: ModelGateway,
    pantheon: Pantheon,
    settings: StageSettings,
}

impl AgentSelector {
    /// Create a selector (temperature 0.35, 400 tokens)
    #[must_use]
    pub fn new(gateway: ModelGateway) -> Self {
        Self::with_settings(gateway, StageSettings::new(0.35, 400))
    }

    /// Create a selector with explicit sampling options
    #[must_use]
    pub fn with_settings(gateway: ModelGateway, settings: StageSettings) -> Self {
        Self {
            gateway,
            pantheon: Pantheon::builtin(),
            settings,
        }
    }

    /// Select agents for a query. Never fails.
    pub async fn select(
        &self,
        query: &str,
        context: &Context,
        analysis: Option<&CognitiveLoadAnalysis>,
    ) -> AgentSelection {
        let messages = vec![
            Message::system(self.system_prompt()),
            Message::user(user_prompt(query, context, analysis)),
        ];

        let selection = match self.gateway.complete_with(messages, self.settings).await {
            Ok(raw) => extract_json_object(&raw)
                .as_ref()
                .and_then(Value::as_object)
                .and_then(parse_selection)
                .unwrap_or_else(|| {
                    warn!("no usable agent selection in model output, using keyword fallback");
                    keyword_selection(query)
                }),
            Err(e) => {
                warn!(error = %e, "agent selection failed, using keyword fallback");
                keyword_selection(query)
            }
        };

        info!(
            agents = ?selection.selected_agents,
            primary = %selection.primary_agent,
            pattern = %selection.collaboration_pattern,
            source = ?selection.source,
            "agents selected"
        );
        selection
    }

    fn system_prompt(&self) -> String {
        let capabilities = self
            .pantheon
            .iter()
            .map(|p| format!("- {} ({}): Best for {}", p.name.to_uppercase(), p.key, p.best_for))
            .collect::<Vec<_>>()
            .join("\n");

        let patterns = CollaborationPattern::ALL
            .iter()
            .map(|p| format!("- {}: {}", p, p.description()))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "You are a coordinator that selects which philosophical agents should respond to a user query.

AGENT CAPABILITIES:
{capabilities}

COLLABORATION PATTERNS:
{patterns}

SELECTION CRITERIA:
1. EMOTIONAL TONE: anxiety -> marcus, confusion -> socrates, forcing -> laotzu, analysis -> aristotle
2. PROBLEM TYPE: existential -> socrates, practical -> marcus/aristotle, flow -> laotzu
3. COMPLEXITY: simple -> 2 agents, complex -> 3 agents

Return only a JSON object:
{{
  \"selected_agents\": [\"agent_key\", \"agent_key\"],
  \"primary_agent\": \"agent_key\",
  \"collaboration_pattern\": \"sequential | parallel | hierarchical | dialectical\",
  \"reasoning_depth\": \"light | moderate | deep\",
  \"selection_rationale\": \"why these agents\",
  \"expected_synergies\": [\"...\"],
  \"query_analysis\": {{\"emotional_tone\": \"...\", \"problem_type\": \"...\", \"key_themes\": [\"...\"]}}
}}
Select 2-3 agents."
        )
    }
}

fn user_prompt(query: &str, context: &Context, analysis: Option<&CognitiveLoadAnalysis>) -> String {
    let mut prompt = format!(
        "User Query: {query}\nContext: {}",
        serde_json::to_string(context).unwrap_or_default()
    );
    if let Some(analysis) = analysis {
        prompt.push_str("\nCognitive Analysis: ");
        prompt.push_str(&serde_json::to_string(analysis).unwrap_or_default());
    }
    prompt
}

/// Parse a model selection; `None` when no known agent is named.
fn parse_selection(object: &Map<String, Value>) -> Option<AgentSelection> {
    let entries = object
        .get("selected_agents")
        .or_else(|| object.get("selectedAgents"))
        .or_else(|| object.get("agents"))?;

    let mut selected_agents = normalize_agents(entries);
    if selected_agents.is_empty() {
        return None;
    }

    // The primary always leads the roster; the rest keep their order.
    if let Some(index) = text_field(object, &["primary_agent", "primaryAgent"])
        .and_then(|raw| Pantheon::resolve_name(&raw))
        .and_then(|key| selected_agents.iter().position(|k| k == key))
    {
        selected_agents[..=index].rotate_right(1);
    }
    let primary_agent = selected_agents[0].clone();

    let collaboration_pattern = text_field(object, &["collaboration_pattern", "collaborationPattern"])
        .and_then(|label| CollaborationPattern::parse(&label))
        .unwrap_or_default();

    let query_analysis = object
        .get("query_analysis")
        .or_else(|| object.get("queryAnalysis"))
        .and_then(Value::as_object)
        .map(|qa| {
            let defaults = QueryAnalysis::default();
            QueryAnalysis {
                emotional_tone: text_field(qa, &["emotional_tone", "emotionalTone"])
                    .unwrap_or(defaults.emotional_tone),
                problem_type: text_field(qa, &["problem_type", "problemType"])
                    .unwrap_or(defaults.problem_type),
                key_themes: list_field(qa, &["key_themes", "keyThemes"])
                    .unwrap_or(defaults.key_themes),
            }
        });

    Some(AgentSelection {
        primary_agent,
        selected_agents,
        collaboration_pattern,
        reasoning_depth: text_field(object, &["reasoning_depth", "reasoningDepth"])
            .unwrap_or_else(|| "moderate".to_string()),
        selection_rationale: text_field(
            object,
            &["selection_rationale", "selectionRationale", "reasoning", "rationale"],
        )
        .unwrap_or_default(),
        expected_synergies: list_field(object, &["expected_synergies", "expectedSynergies"])
            .unwrap_or_default(),
        query_analysis,
        source: SelectionSource::Model,
    })
}

/// Resolve model-provided agent entries to known keys.
///
/// Accepts plain strings, `{"name": ..}`/`{"agent": ..}` objects and
/// single-key mappings such as `{"socrates": "reason"}`.
fn normalize_agents(entries: &Value) -> Vec<String> {
    let candidates: Vec<String> = match entries {
        Value::Array(items) => items.iter().filter_map(candidate_name).collect(),
        Value::String(s) => s.split(',').map(str::to_string).collect(),
        other => candidate_name(other).into_iter().collect(),
    };

    let mut keys: Vec<String> = Vec::new();
    for candidate in candidates {
        if let Some(key) = Pantheon::resolve_name(&candidate) {
            if !keys.iter().any(|k| k == key) {
                keys.push(key.to_string());
            }
        }
    }
    keys.truncate(MAX_AGENTS);
    keys
}

fn candidate_name(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => {
            for field in ["name", "agent", "key"] {
                if let Some(name) = map.get(field).and_then(Value::as_str) {
                    return Some(name.to_string());
                }
            }
            if map.len() == 1 {
                map.keys().next().cloned()
            } else {
                None
            }
        }
        _ => None,
    }
}
