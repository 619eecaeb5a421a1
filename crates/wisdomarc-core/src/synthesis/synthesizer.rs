//! Model-backed synthesizer with deterministic fallback

use super::enhancement::enhance;
use super::types::{Synthesis, SynthesisSource};
use crate::agents::StructuredInsight;
use crate::analysis::CognitiveLoadAnalysis;
use crate::extract::{extract_json_object, list_field, text_field};
use crate::gateway::{ModelGateway, StageSettings};
use crate::selection::AgentSelection;
use serde_json::{json, Map, Value};
use tracing::{info, warn};
use wisdomarc_llm::Message;

const SYNTHESIS_PROMPT: &str = "You are a METACOGNITIVE SYNTHESIS engine. Several philosophers \
reasoned about the same query. Integrate their perspectives into one coherent answer that also \
teaches the user something about how they think.
Return only a JSON object with these keys:
{
  \"integrated_wisdom\": \"the unified answer\",
  \"key_insights\": [\"...\"],
  \"practical_steps\": [\"...\"],
  \"metacognitive_enhancement\": \"what the user can learn about their own thinking\",
  \"reasoning_quality_assessment\": \"how well the perspectives fit together\",
  \"cognitive_bridges\": [\"links between the perspectives\"],
  \"transformative_elements\": [\"...\"],
  \"application_scenarios\": [\"...\"],
  \"deepening_questions\": [\"...\"]
}";

/// Merges a reasoning chain into a [`Synthesis`]
#[derive(Debug, Clone)]
pub struct Synthesizer {
    gateway: ModelGateway,
    settings: StageSettings,
}

impl Synthesizer {
    /// Create a synthesizer (temperature 0.8, 1500 tokens)
    #[must_use]
    pub fn new(gateway: ModelGateway) -> Self {
        Self::with_settings(gateway, StageSettings::new(0.8, 1500))
    }

    /// Create a synthesizer with explicit sampling options
    #[must_use]
    pub fn with_settings(gateway: ModelGateway, settings: StageSettings) -> Self {
        Self { gateway, settings }
    }

    /// Synthesize the chain. Never fails.
    pub async fn synthesize(
        &self,
        query: &str,
        chain: &[StructuredInsight],
        selection: &AgentSelection,
        analysis: &CognitiveLoadAnalysis,
    ) -> Synthesis {
        let payload = json!({
            "original_query": query,
            "reasoning_chain": chain,
            "agent_selection": selection,
            "cognitive_analysis": analysis,
        });
        let body = serde_json::to_string_pretty(&payload).unwrap_or_default();
        let messages = vec![Message::system(SYNTHESIS_PROMPT), Message::user(body)];

        let base = match self.gateway.complete_with(messages, self.settings).await {
            Ok(raw) => extract_json_object(&raw)
                .as_ref()
                .and_then(Value::as_object)
                .and_then(parse_synthesis)
                .unwrap_or_else(|| {
                    warn!("unparseable synthesis, using fallback");
                    fallback_base(chain)
                }),
            Err(e) => {
                warn!(error = %e, "synthesis call failed, using fallback");
                fallback_base(chain)
            }
        };

        let synthesis = enhance(base, chain);
        info!(
            source = ?synthesis.source,
            quality = synthesis.synthesis_quality_score,
            "synthesis complete"
        );
        synthesis
    }

    /// Fallback synthesis for a chain, fully enhanced. Deterministic.
    #[must_use]
    pub fn fallback(chain: &[StructuredInsight]) -> Synthesis {
        enhance(fallback_base(chain), chain)
    }
}

fn parse_synthesis(object: &Map<String, Value>) -> Option<Synthesis> {
    let integrated_wisdom =
        text_field(object, &["integrated_wisdom", "integratedWisdom", "synthesis"])?;
    let list = |keys: &[&str]| list_field(object, keys).unwrap_or_default();
    let text = |keys: &[&str]| text_field(object, keys).unwrap_or_default();

    Some(Synthesis {
        integrated_wisdom,
        key_insights: list(&["key_insights", "keyInsights"]),
        practical_steps: list(&["practical_steps", "practicalSteps"]),
        metacognitive_enhancement: text(&["metacognitive_enhancement", "metacognitiveEnhancement"]),
        reasoning_quality_assessment: text(&[
            "reasoning_quality_assessment",
            "reasoningQualityAssessment",
        ]),
        cognitive_bridges: list(&["cognitive_bridges", "cognitiveBridges"]),
        transformative_elements: list(&["transformative_elements", "transformativeElements"]),
        application_scenarios: list(&["application_scenarios", "applicationScenarios"]),
        deepening_questions: list(&["deepening_questions", "deepeningQuestions", "next_explorations"]),
        metacognitive_prompts: Vec::new(),
        dialectical_challenges: Vec::new(),
        synthesis_quality_score: 0.0,
        cognitive_enhancement_elements: Vec::new(),
        source: SynthesisSource::Model,
    })
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn fallback_base(chain: &[StructuredInsight]) -> Synthesis {
    let integrated_wisdom = chain
        .iter()
        .map(|i| format!("{}: {}", i.philosopher, i.core_insight))
        .collect::<Vec<_>>()
        .join("\n\n");

    Synthesis {
        integrated_wisdom,
        key_insights: strings(&[
            "Multiple perspectives provide richer understanding",
            "Each tradition illuminates a different side of the problem",
        ]),
        practical_steps: strings(&[
            "Choose the perspective that resonates most and apply it to one concrete situation",
            "Notice what is and is not within your control",
            "Revisit the question after a day of reflection",
        ]),
        metacognitive_enhancement: "Comparing several lenses on one problem shows how much of a \
            difficulty lives in the way it is framed."
            .to_string(),
        reasoning_quality_assessment: "Perspectives gathered independently; no model synthesis \
            was available."
            .to_string(),
        cognitive_bridges: strings(&["Different traditions converge on self-examination"]),
        transformative_elements: strings(&["Shift from reacting to reflecting"]),
        application_scenarios: strings(&[
            "Daily decisions",
            "Moments of stress or uncertainty",
        ]),
        deepening_questions: strings(&[
            "Which perspective would you like to explore further?",
            "How would you apply this insight tomorrow?",
        ]),
        metacognitive_prompts: Vec::new(),
        dialectical_challenges: Vec::new(),
        synthesis_quality_score: 0.0,
        cognitive_enhancement_elements: Vec::new(),
        source: SynthesisSource::Fallback,
    }
}
