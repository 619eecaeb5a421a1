//! Prompt construction for agent calls

use crate::pantheon::Persona;
use crate::Context;
use serde_json::Value;
use wisdomarc_llm::Message;

use super::insight::StructuredInsight;

const REASONING_FRAMEWORK: &str = "METACOGNITIVE REASONING FRAMEWORK
Reason transparently about the query below and report on your own thinking.
Respond with a single JSON object using exactly these keys:
{
  \"reasoning_type\": \"analytical | intuitive | bridging\",
  \"core_insight\": \"your central insight in 2-3 sentences\",
  \"reasoning_process\": \"the steps you took to reach it\",
  \"metacognitive_awareness\": \"what you noticed about your own thinking\",
  \"socratic_catalyst\": \"one question that moves the user forward\",
  \"practical_application\": \"a concrete action the user can take\",
  \"connection_to_principles\": \"how this follows from your principles\",
  \"cognitive_stimulation\": \"a thought that stretches the user's perspective\"
}";

const VALIDATION_FRAMEWORK: &str = "PEER REASONING TO VALIDATE
Another philosopher produced the reasoning below. Evaluate it from your own tradition.
Respond with a single JSON object using exactly these keys:
{
  \"validation_score\": 0.0,
  \"strengths\": [\"...\"],
  \"concerns\": [\"...\"],
  \"complementary_insight\": \"what your tradition adds\",
  \"synthesis_suggestion\": \"how both views could be integrated\"
}
validation_score is between 0.0 and 1.0.";

/// `[system, user]` messages for one reasoning step
pub(crate) fn reasoning_messages(persona: &Persona, query: &str, context: &Context) -> Vec<Message> {
    let context_json = serde_json::to_string_pretty(&Value::Object(context.clone()))
        .unwrap_or_else(|_| "{}".to_string());

    let user = format!(
        "{framework}\n\nYOUR CORE PRINCIPLES:\n{principles}\n\nUSER QUERY:\n{query}\n\nCONTEXT:\n{context_json}",
        framework = REASONING_FRAMEWORK,
        principles = persona.principles_block(),
    );

    vec![Message::system(persona.system_prompt), Message::user(user)]
}

/// `[system, user]` messages for a peer validation
pub(crate) fn validation_messages(persona: &Persona, peer: &StructuredInsight) -> Vec<Message> {
    let peer_json = serde_json::to_string_pretty(peer).unwrap_or_default();

    let user = format!(
        "{framework}\n\nYOUR CORE PRINCIPLES:\n{principles}\n\nREASONING FROM {peer_name}:\n{peer_json}",
        framework = VALIDATION_FRAMEWORK,
        principles = persona.principles_block(),
        peer_name = peer.philosopher.to_uppercase(),
    );

    vec![Message::system(persona.system_prompt), Message::user(user)]
}
