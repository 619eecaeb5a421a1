//! Insight and validation records with tolerant parsing

use crate::extract::{clamp_unit, list_field, number_field, text_field, truncate_chars};
use crate::pantheon::{Persona, ReasoningType};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Characters of raw model text kept when an insight cannot be parsed
pub const RAW_INSIGHT_LIMIT: usize = 200;

/// Score given when a validation cannot be parsed
pub const FALLBACK_VALIDATION_SCORE: f64 = 0.8;

/// One agent's output for one reasoning step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredInsight {
    /// Persona key
    pub agent: String,
    /// Persona display name
    pub philosopher: String,
    /// Reasoning mode the agent reported
    pub reasoning_type: ReasoningType,
    /// Main insight
    pub core_insight: String,
    /// How the agent got there
    pub reasoning_process: String,
    /// What the agent noticed about its own thinking
    pub metacognitive_awareness: String,
    /// Question handed back to the user
    pub socratic_catalyst: String,
    /// Concrete application
    pub practical_application: String,
    /// Link to the persona's principles
    pub connection_to_principles: String,
    /// Prompt for further thought
    pub cognitive_stimulation: String,
    /// Peer critique (dialectical pattern only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer_validation: Option<ValidationFeedback>,
    /// Suggested synthesis from the peer critique (dialectical pattern only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialectical_synthesis: Option<String>,
    /// Set when the agent's task failed outright
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl StructuredInsight {
    /// Parse a model-produced JSON object.
    ///
    /// Returns `None` when no usable core insight is present.
    pub(crate) fn from_model(persona: &Persona, object: &Map<String, Value>) -> Option<Self> {
        let core_insight = text_field(object, &["core_insight", "coreInsight", "insight"])?;
        let template = Self::template(persona, core_insight);

        let reasoning_type = text_field(object, &["reasoning_type", "reasoningType"])
            .and_then(|label| ReasoningType::parse(&label))
            .unwrap_or(persona.reasoning_style);

        let pick = |keys: &[&str], default: String| text_field(object, keys).unwrap_or(default);

        Some(Self {
            reasoning_type,
            reasoning_process: pick(
                &["reasoning_process", "reasoningProcess"],
                template.reasoning_process.clone(),
            ),
            metacognitive_awareness: pick(
                &["metacognitive_awareness", "metacognitiveAwareness"],
                template.metacognitive_awareness.clone(),
            ),
            socratic_catalyst: pick(
                &["socratic_catalyst", "socraticCatalyst"],
                template.socratic_catalyst.clone(),
            ),
            practical_application: pick(
                &["practical_application", "practicalApplication"],
                template.practical_application.clone(),
            ),
            connection_to_principles: pick(
                &["connection_to_principles", "connectionToPrinciples"],
                template.connection_to_principles.clone(),
            ),
            cognitive_stimulation: pick(
                &["cognitive_stimulation", "cognitiveStimulation"],
                template.cognitive_stimulation.clone(),
            ),
            ..template
        })
    }

    /// Deterministic insight used when the model output is unusable.
    ///
    /// `raw` is the model text (possibly empty when the call failed).
    pub fn fallback(persona: &Persona, raw: &str) -> Self {
        let raw = raw.trim();
        let core_insight = if raw.is_empty() {
            format!(
                "{} invites you to pause and examine this situation through the principle: {}.",
                persona.name, persona.core_principles[0]
            )
        } else {
            truncate_chars(raw, RAW_INSIGHT_LIMIT)
        };
        Self::template(persona, core_insight)
    }

    /// Marker recorded in place of an agent whose task failed.
    pub fn error_marker(persona: &Persona) -> Self {
        Self {
            is_error: true,
            ..Self::template(persona, format!("{}: Error generating response.", persona.name))
        }
    }

    fn template(persona: &Persona, core_insight: String) -> Self {
        let first_principle = persona.core_principles[0];
        Self {
            agent: persona.key.to_string(),
            philosopher: persona.name.to_string(),
            reasoning_type: persona.reasoning_style,
            core_insight,
            reasoning_process: format!(
                "Applied {}'s core principles to the situation described.",
                persona.name
            ),
            metacognitive_awareness:
                "Notice which assumptions shape the way you are framing this situation."
                    .to_string(),
            socratic_catalyst: "What would change if you examined this from a different angle?"
                .to_string(),
            practical_application: format!(
                "Reflect on how \"{}\" applies to your situation today.",
                first_principle
            ),
            connection_to_principles: format!(
                "Grounded in: {}",
                persona.core_principles[..2].join("; ")
            ),
            cognitive_stimulation:
                "Consider how this perspective challenges your first reaction.".to_string(),
            peer_validation: None,
            dialectical_synthesis: None,
            is_error: false,
        }
    }
}

/// One agent's critique of a peer insight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationFeedback {
    /// Persona key of the validating agent
    pub validator: String,
    /// Agreement score in [0.0, 1.0]
    pub validation_score: f64,
    /// What holds up
    pub strengths: Vec<String>,
    /// What does not
    pub concerns: Vec<String>,
    /// What the validator would add
    pub complementary_insight: String,
    /// How both views could be combined
    pub synthesis_suggestion: String,
}

impl ValidationFeedback {
    pub(crate) fn from_model(validator: &Persona, object: &Map<String, Value>) -> Option<Self> {
        let score = number_field(object, &["validation_score", "validationScore", "score"])?;
        let fallback = Self::fallback(validator);

        Some(Self {
            validation_score: clamp_unit(score),
            strengths: list_field(object, &["strengths"]).unwrap_or_else(|| fallback.strengths.clone()),
            concerns: list_field(object, &["concerns"]).unwrap_or_default(),
            complementary_insight: text_field(
                object,
                &["complementary_insight", "complementaryInsight"],
            )
            .unwrap_or_else(|| fallback.complementary_insight.clone()),
            synthesis_suggestion: text_field(
                object,
                &["synthesis_suggestion", "synthesisSuggestion"],
            )
            .unwrap_or_else(|| fallback.synthesis_suggestion.clone()),
            ..fallback
        })
    }

    /// Deterministic feedback used when the model output is unusable.
    pub fn fallback(validator: &Persona) -> Self {
        Self {
            validator: validator.key.to_string(),
            validation_score: FALLBACK_VALIDATION_SCORE,
            strengths: vec!["Offers a coherent perspective grounded in its tradition".to_string()],
            concerns: Vec::new(),
            complementary_insight: format!(
                "{} would add the lens of \"{}\".",
                validator.name, validator.core_principles[0]
            ),
            synthesis_suggestion:
                "Integrate both perspectives to form a more complete understanding.".to_string(),
        }
    }
}
