//! JSON bodies exchanged with the daemon

use crate::completion::{CompletionRequest, TokenUsage};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(super) struct ChatBody<'a> {
    pub model: &'a str,
    pub messages: Vec<WireMessage<'a>>,
    pub options: Sampling<'a>,
    pub stream: bool,
}

impl<'a> ChatBody<'a> {
    pub fn new(model: &'a str, request: &'a CompletionRequest) -> Self {
        Self {
            model,
            messages: request
                .messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            options: Sampling {
                temperature: request.temperature,
                num_predict: request.max_tokens,
                stop: request.stop.as_deref(),
            },
            stream: false,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct WireMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct Sampling<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<&'a [String]>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ChatReply {
    pub model: String,
    pub message: ReplyMessage,
    #[serde(default)]
    pub done_reason: Option<String>,
    #[serde(default)]
    pub prompt_eval_count: Option<u32>,
    #[serde(default)]
    pub eval_count: Option<u32>,
}

impl ChatReply {
    pub fn usage(&self) -> Option<TokenUsage> {
        let (prompt, completion) = (self.prompt_eval_count?, self.eval_count?);
        Some(TokenUsage {
            prompt_tokens: prompt,
            completion_tokens: completion,
            total_tokens: prompt + completion,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ReplyMessage {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct Tags {
    pub models: Vec<TagEntry>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TagEntry {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct Failure {
    pub error: String,
}
