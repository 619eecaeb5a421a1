use super::*;
use futures::StreamExt;
use serde_json::json;
use wisdomarc_llm::MockProvider;

fn coordinator(provider: &MockProvider) -> WisdomCoordinator {
    WisdomCoordinator::new(ModelGateway::new(Arc::new(provider.clone())))
}

#[test]
fn test_default_config() {
    let config = CoordinatorConfig::default();

    assert_eq!(config.agent, StageSettings::new(0.8, 800));
    assert_eq!(config.validation, StageSettings::new(0.6, 500));
    assert_eq!(config.analyzer, StageSettings::new(0.3, 400));
    assert_eq!(config.selector, StageSettings::new(0.35, 400));
    assert_eq!(config.synthesis, StageSettings::new(0.8, 1500));
    assert_eq!(config.agent_settings().history_limit, 20);
}

#[test]
fn test_event_wire_format() {
    let event = ProgressEvent::processing(WisdomStep::CognitiveAnalysis, "Analyzing");
    let value = serde_json::to_value(&event).unwrap();

    assert_eq!(value["step"], "cognitive_analysis");
    assert_eq!(value["status"], "processing");
    assert_eq!(value["message"], "Analyzing");
    assert!(value.get("data").is_none());
    assert!(value["timestamp"].is_string());

    let done = ProgressEvent::complete(WisdomStep::IntegrationComplete, json!({"ok": true}));
    assert!(done.is_terminal());
    assert!(ProgressEvent::error("boom").is_terminal());
    assert!(!event.is_terminal());
}

#[test]
fn test_error_payload() {
    let payload = ErrorPayload::from(&Error::InvalidQuery("query text cannot be empty".into()));

    assert_eq!(payload.error, "invalid_query");
    assert!(payload.message.contains("cannot be empty"));
}

#[tokio::test]
async fn test_blank_query_is_rejected_without_calls() {
    let provider = MockProvider::new();
    let coordinator = coordinator(&provider);

    assert!(matches!(
        coordinator.stream_wisdom("   \n\t", Context::new()),
        Err(Error::InvalidQuery(_))
    ));
    assert!(matches!(
        coordinator.ask_wisdom("", Context::new()).await,
        Err(Error::InvalidQuery(_))
    ));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_stream_is_lazy() {
    let provider = MockProvider::new();
    let coordinator = coordinator(&provider);

    let mut events = coordinator
        .stream_wisdom("I am stuck", Context::new())
        .unwrap();
    assert_eq!(provider.call_count(), 0);

    let first = events.next().await.unwrap();
    assert_eq!(first.step, WisdomStep::CognitiveAnalysis);
    assert_eq!(first.status, StepStatus::Processing);
    assert_eq!(provider.call_count(), 0);

    let second = events.next().await.unwrap();
    assert_eq!(second.status, StepStatus::Complete);
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_query_is_trimmed() {
    let provider = MockProvider::new();
    let result = coordinator(&provider)
        .ask_wisdom("  I am stuck \n", Context::new())
        .await
        .unwrap();

    assert_eq!(result.query, "I am stuck");
    assert_eq!(result.reasoning_quality, REASONING_QUALITY);
}
