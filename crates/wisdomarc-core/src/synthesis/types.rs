//! Synthesis record

use serde::{Deserialize, Serialize};

/// Where the base synthesis came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynthesisSource {
    /// Parsed from the model
    Model,
    /// Built from the chain without a model
    Fallback,
}

/// Unified result of one reasoning chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synthesis {
    /// Integrated answer
    pub integrated_wisdom: String,
    /// Main insights
    pub key_insights: Vec<String>,
    /// Concrete next steps
    pub practical_steps: Vec<String>,
    /// What the user can learn about their own thinking
    pub metacognitive_enhancement: String,
    /// Assessment of the chain's reasoning
    pub reasoning_quality_assessment: String,
    /// Links between the perspectives
    pub cognitive_bridges: Vec<String>,
    /// Shifts the answer invites
    pub transformative_elements: Vec<String>,
    /// Where the advice applies
    pub application_scenarios: Vec<String>,
    /// Follow-up questions
    pub deepening_questions: Vec<String>,
    /// Reflection prompts (first four of a fixed pool)
    pub metacognitive_prompts: Vec<String>,
    /// Counter-perspectives (fixed set)
    pub dialectical_challenges: Vec<String>,
    /// Deterministic quality score in [0.0, 1.0]
    pub synthesis_quality_score: f64,
    /// Tags describing the chain's cognitive range
    pub cognitive_enhancement_elements: Vec<String>,
    /// Model or fallback
    pub source: SynthesisSource,
}
