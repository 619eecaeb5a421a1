use super::client::rejection;
use super::config::{OllamaConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
use super::wire::{ChatBody, ChatReply};
use super::OllamaProvider;
use crate::completion::CompletionRequest;
use crate::error::Error;
use crate::message::Message;
use crate::provider::LlmProvider;
use reqwest::StatusCode;
use std::time::Duration;

#[test]
fn test_config_overrides() {
    let config = OllamaConfig::default()
        .with_base_url("http://10.0.0.5:11434/")
        .with_model("gemma3")
        .with_timeout(Duration::from_secs(30));

    assert_eq!(config.base_url, "http://10.0.0.5:11434");
    assert_eq!(config.endpoint("chat"), "http://10.0.0.5:11434/api/chat");
    assert_eq!(config.default_model, "gemma3");
    assert_eq!(config.timeout, Duration::from_secs(30));
}

#[test]
fn test_default_config() {
    let config = OllamaConfig::default();
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.default_model, DEFAULT_MODEL);
    assert_eq!(config.endpoint("tags"), "http://localhost:11434/api/tags");
}

#[test]
fn test_chat_body_carries_sampling_options() {
    let request = CompletionRequest::new("")
        .with_message(Message::system("You are Aristotle"))
        .with_message(Message::user("Help me decide"))
        .with_temperature(0.3)
        .with_max_tokens(400);

    let json = serde_json::to_value(ChatBody::new("llama3", &request)).unwrap();
    assert_eq!(json["model"], "llama3");
    assert_eq!(json["stream"], false);
    assert_eq!(json["messages"][0]["role"], "system");
    assert_eq!(json["messages"][1]["content"], "Help me decide");
    assert_eq!(json["options"]["num_predict"], 400);
    assert!(json["options"].get("stop").is_none());
}

#[test]
fn test_chat_body_omits_unset_options() {
    let request = CompletionRequest::new("").with_message(Message::user("hi"));
    let json = serde_json::to_value(ChatBody::new("llama3", &request)).unwrap();
    assert_eq!(json["options"], serde_json::json!({}));
}

#[test]
fn test_reply_parsing_and_usage() {
    let body = r#"{
        "model": "llama3",
        "message": {"role": "assistant", "content": "{\"core_insight\": \"x\"}"},
        "done": true,
        "done_reason": "stop",
        "prompt_eval_count": 12,
        "eval_count": 30
    }"#;

    let reply: ChatReply = serde_json::from_str(body).unwrap();
    assert_eq!(reply.message.content, "{\"core_insight\": \"x\"}");
    assert_eq!(reply.usage().map(|u| u.total_tokens), Some(42));

    let bare: ChatReply =
        serde_json::from_str(r#"{"model":"llama3","message":{"content":"ok"}}"#).unwrap();
    assert!(bare.usage().is_none());
}

#[test]
fn test_rejection_mapping() {
    assert!(matches!(
        rejection(StatusCode::TOO_MANY_REQUESTS, ""),
        Error::RateLimit
    ));

    match rejection(StatusCode::NOT_FOUND, r#"{"error":"model 'llama9' not found"}"#) {
        Error::Api(detail) => assert_eq!(detail, "model 'llama9' not found"),
        other => panic!("unexpected error: {other}"),
    }

    match rejection(StatusCode::INTERNAL_SERVER_ERROR, &"x".repeat(50)) {
        Error::Api(detail) => assert!(detail.contains("500")),
        other => panic!("unexpected error: {other}"),
    }

    let long = format!(r#"{{"error":"{}"}}"#, "y".repeat(400));
    match rejection(StatusCode::BAD_REQUEST, &long) {
        Error::Api(detail) => assert!(detail.ends_with("...") && detail.len() < 400),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_reports_configured_model() {
    let provider = OllamaProvider::new(OllamaConfig::default().with_model("qwen2.5:7b")).unwrap();
    assert_eq!(provider.name(), "ollama");
    assert_eq!(provider.default_model(), "qwen2.5:7b");
    assert_eq!(provider.available_models(), vec!["qwen2.5:7b".to_string()]);
}

#[tokio::test]
async fn test_unreachable_daemon() {
    // Nothing listens on the discard port; the connect fails fast.
    let provider = OllamaProvider::new(
        OllamaConfig::default()
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(Duration::from_secs(2)),
    )
    .unwrap();

    let request = CompletionRequest::new("").with_message(Message::user("hello"));
    let err = provider.complete(request).await.unwrap_err();
    assert!(err.is_unavailable(), "unexpected error: {err}");
    assert!(!provider.health_check().await);
}
