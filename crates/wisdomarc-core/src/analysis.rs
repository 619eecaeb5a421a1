//! Cognitive Load Analyzer
//!
//! Scores how demanding a query is along five dimensions. The analysis
//! informs agent selection and synthesis but never gates them.

use crate::extract::{clamp_unit, extract_json_object, list_field, number_field, text_field};
use crate::gateway::{ModelGateway, StageSettings};
use crate::pantheon::Pantheon;
use crate::Context;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};
use wisdomarc_llm::Message;

const ANALYZER_PROMPT: &str = "You are a COGNITIVE LOAD ANALYSIS module for a philosophical guidance system.
Score the user's query on each dimension from 0.0 (none) to 1.0 (extreme):
- emotional_intensity: strength of the emotions expressed
- conceptual_complexity: how abstract or intricate the problem is
- decision_urgency: how soon a decision is needed
- ambiguity_level: how unclear the situation or question is
- personal_stakes: how much the outcome matters to the person

Then recommend how to respond.
Return only a JSON object:
{
  \"emotional_intensity\": 0.0,
  \"conceptual_complexity\": 0.0,
  \"decision_urgency\": 0.0,
  \"ambiguity_level\": 0.0,
  \"personal_stakes\": 0.0,
  \"overall_load\": 0.0,
  \"recommended_approach\": \"gentle | standard | intensive\",
  \"suggested_agents\": [\"socrates\", \"marcus\", \"laotzu\", \"aristotle\"],
  \"pacing_recommendation\": \"slow | normal | rapid\"
}";

/// How much depth the response should carry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedApproach {
    /// Light touch for distressed users
    Gentle,
    /// Regular depth
    #[default]
    Standard,
    /// Full depth
    Intensive,
}

impl RecommendedApproach {
    fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "gentle" => Self::Gentle,
            "intensive" => Self::Intensive,
            _ => Self::Standard,
        }
    }
}

/// How quickly the response should move
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pacing {
    /// Slow, reflective
    Slow,
    /// Regular
    #[default]
    Normal,
    /// Brisk
    Rapid,
}

impl Pacing {
    fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "slow" => Self::Slow,
            "rapid" | "fast" => Self::Rapid,
            _ => Self::Normal,
        }
    }
}

/// Scored assessment of a query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CognitiveLoadAnalysis {
    /// Strength of emotion
    pub emotional_intensity: f64,
    /// Abstraction of the problem
    pub conceptual_complexity: f64,
    /// Time pressure
    pub decision_urgency: f64,
    /// Unclarity
    pub ambiguity_level: f64,
    /// Personal importance
    pub personal_stakes: f64,
    /// Combined load
    pub overall_load: f64,
    /// Suggested depth
    pub recommended_approach: RecommendedApproach,
    /// Suggested persona keys
    pub suggested_agents: Vec<String>,
    /// Suggested pacing
    pub pacing_recommendation: Pacing,
}

impl CognitiveLoadAnalysis {
    /// Fixed mid-range analysis used when the model output is unusable
    #[must_use]
    pub fn fallback() -> Self {
        let scores = [0.5, 0.5, 0.3, 0.4, 0.6];
        Self {
            emotional_intensity: scores[0],
            conceptual_complexity: scores[1],
            decision_urgency: scores[2],
            ambiguity_level: scores[3],
            personal_stakes: scores[4],
            overall_load: mean(&scores),
            recommended_approach: RecommendedApproach::Standard,
            suggested_agents: default_suggestions(),
            pacing_recommendation: Pacing::Normal,
        }
    }

    fn from_model(object: &Map<String, Value>) -> Option<Self> {
        let score = |keys: &[&str]| number_field(object, keys).map(clamp_unit);

        let scores = [
            score(&["emotional_intensity", "emotionalIntensity"])?,
            score(&["conceptual_complexity", "conceptualComplexity"])?,
            score(&["decision_urgency", "decisionUrgency"])?,
            score(&["ambiguity_level", "ambiguityLevel"])?,
            score(&["personal_stakes", "personalStakes"])?,
        ];

        let mut suggested_agents: Vec<String> = Vec::new();
        for raw in list_field(object, &["suggested_agents", "suggestedAgents"]).unwrap_or_default() {
            if let Some(key) = Pantheon::resolve_name(&raw) {
                if !suggested_agents.iter().any(|k| k == key) {
                    suggested_agents.push(key.to_string());
                }
            }
        }
        if suggested_agents.is_empty() {
            suggested_agents = default_suggestions();
        }

        Some(Self {
            emotional_intensity: scores[0],
            conceptual_complexity: scores[1],
            decision_urgency: scores[2],
            ambiguity_level: scores[3],
            personal_stakes: scores[4],
            overall_load: score(&["overall_load", "overallLoad"]).unwrap_or_else(|| mean(&scores)),
            recommended_approach: text_field(object, &["recommended_approach", "recommendedApproach"])
                .map(|s| RecommendedApproach::parse(&s))
                .unwrap_or_default(),
            suggested_agents,
            pacing_recommendation: text_field(
                object,
                &["pacing_recommendation", "pacingRecommendation"],
            )
            .map(|s| Pacing::parse(&s))
            .unwrap_or_default(),
        })
    }
}

fn default_suggestions() -> Vec<String> {
    vec!["socrates".to_string(), "marcus".to_string()]
}

fn mean(scores: &[f64]) -> f64 {
    clamp_unit(scores.iter().sum::<f64>() / scores.len() as f64)
}

/// Scores queries through one model call
#[derive(Debug, Clone)]
pub struct CognitiveLoadAnalyzer {
    gateway: ModelGateway,
    settings: StageSettings,
}

impl CognitiveLoadAnalyzer {
    /// Create an analyzer (temperature 0.3, 400 tokens)
    #[must_use]
    pub fn new(gateway: ModelGateway) -> Self {
        Self::with_settings(gateway, StageSettings::new(0.3, 400))
    }

    /// Create an analyzer with explicit sampling options
    #[must_use]
    pub fn with_settings(gateway: ModelGateway, settings: StageSettings) -> Self {
        Self { gateway, settings }
    }

    /// Analyze a query. Never fails.
    pub async fn analyze(&self, query: &str, context: &Context) -> CognitiveLoadAnalysis {
        let context_json = serde_json::to_string(context).unwrap_or_default();
        let messages = vec![
            Message::system(ANALYZER_PROMPT),
            Message::user(format!("User Query: {query}\nContext: {context_json}")),
        ];

        let analysis = match self.gateway.complete_with(messages, self.settings).await {
            Ok(raw) => extract_json_object(&raw)
                .as_ref()
                .and_then(Value::as_object)
                .and_then(CognitiveLoadAnalysis::from_model)
                .unwrap_or_else(|| {
                    warn!("unparseable cognitive load analysis, using fallback");
                    CognitiveLoadAnalysis::fallback()
                }),
            Err(e) => {
                warn!(error = %e, "cognitive load analysis failed, using fallback");
                CognitiveLoadAnalysis::fallback()
            }
        };

        info!(
            overall_load = analysis.overall_load,
            approach = ?analysis.recommended_approach,
            "cognitive load analyzed"
        );
        analysis
    }
}
