use super::*;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use wisdomarc_core::{ModelGateway, WisdomCoordinator};
use wisdomarc_llm::MockProvider;

fn router_with(provider: MockProvider) -> Router {
    let gateway = ModelGateway::new(Arc::new(provider));
    app_router(WisdomCoordinator::new(gateway))
}

fn offline_router() -> Router {
    router_with(MockProvider::failing(wisdomarc_llm::Error::Network(
        "connection refused".into(),
    )))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_ask(body: Value) -> Request<Body> {
    Request::post("/ask")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_root_banner() {
    let response = offline_router()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["endpoints"]["POST /ask"].is_string());
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_ask_returns_result_with_metadata() {
    let response = offline_router()
        .oneshot(post_ask(json!({"text": "I feel anxious and can't control this"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let consulted = body["philosophers_consulted"].as_array().unwrap();
    assert!(consulted.contains(&json!("marcus")));
    assert_eq!(body["reasoning_quality"], "advanced_llm_powered");
    assert_eq!(body["response_metadata"]["system_version"], wisdom::SYSTEM_VERSION);
    assert!(body["synthesis"]["integrated_wisdom"].is_string());
}

#[tokio::test]
async fn test_ask_empty_text_is_bad_request() {
    let provider = MockProvider::new();
    let router = router_with(provider.clone());

    for body in [json!({"text": "   "}), json!({})] {
        let response = router.clone().oneshot(post_ask(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "invalid_query");
    }

    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_ask_forwards_merged_context() {
    let provider = MockProvider::new();
    let router = router_with(provider.clone());

    let response = router
        .oneshot(post_ask(json!({
            "text": "How do I find balance?",
            "context": {"mood": "restless"},
            "user_preferences": {"tone": "gentle"}
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let prompt = provider
        .requests()
        .iter()
        .map(|r| r.prompt_text())
        .find(|p| p.contains("METACOGNITIVE REASONING FRAMEWORK"))
        .unwrap();
    assert!(prompt.contains("restless"));
    assert!(prompt.contains("gentle"));
    assert!(prompt.contains("\"processing_mode\""));
}

#[test]
fn test_combined_context_order() {
    let request: wisdom::AskRequest = serde_json::from_value(json!({
        "text": "q",
        "context": {"processing_mode": "stream", "a": 1},
        "user_preferences": {"a": 2}
    }))
    .unwrap();

    let combined = request.combined_context();
    assert_eq!(combined["a"], 2);
    assert_eq!(combined["processing_mode"], "batch");
    assert_eq!(combined["enhancement_level"], "comprehensive");
}

#[tokio::test]
async fn test_agents_listing() {
    let response = offline_router()
        .oneshot(Request::get("/agents").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let keys: Vec<_> = body["agents"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["key"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(keys, vec!["socrates", "marcus", "laotzu", "aristotle"]);
    assert!(body["agents"][0].get("system_prompt").is_none());
    assert_eq!(body["collaboration_patterns"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_reasoning_demo_names_known_agents() {
    let response = offline_router()
        .oneshot(Request::get("/reasoning-demo").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let samples = body["sample_queries"].as_array().unwrap();
    assert_eq!(samples.len(), demo::SAMPLE_QUERIES.len());

    let pantheon = wisdomarc_core::Pantheon::builtin();
    for sample in samples {
        assert!(!sample["query"].as_str().unwrap().is_empty());
        for key in sample["expected_agents"].as_array().unwrap() {
            assert!(pantheon.get(key.as_str().unwrap()).is_some(), "unknown agent {key}");
        }
    }
}

#[tokio::test]
async fn test_health_reports_backend_state() {
    let response = router_with(MockProvider::new())
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["agents_available"], 4);
    assert_eq!(body["provider"], "mock");

    let response = offline_router()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["status"], "degraded");
}

#[test]
fn test_api_error_status_codes() {
    use wisdomarc_core::Error;

    assert_eq!(
        ApiError(Error::InvalidQuery("empty".into())).status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        ApiError(Error::Pipeline("boom".into())).status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
