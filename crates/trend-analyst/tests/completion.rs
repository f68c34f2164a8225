mod common;

use std::sync::Arc;
use std::time::Duration;

use trend_analyst::{prompt::build_prompt, AnalysisText, CompletionClient, MarketRecord, TradingPair, ANALYSIS_UNAVAILABLE};
use trend_core::GenerationOptions;
use trend_runtime::{DeepSeekConfig, DeepSeekProvider};

use common::{Canned, StubServer};

const ANSWER: &str = r#"{
    "id": "cmpl-1",
    "model": "deepseek-chat",
    "choices": [
        {"index": 0, "message": {"role": "assistant", "content": "1. Trend: up\n2. Support: 48k"}, "finish_reason": "stop"}
    ],
    "usage": {"prompt_tokens": 120, "completion_tokens": 12, "total_tokens": 132}
}"#;

fn client(server: &StubServer, timeout: Duration) -> CompletionClient {
    let mut config = DeepSeekConfig::new("sk-test");
    config.base_url = format!("{}/v1", server.base_url);
    config.timeout = timeout;

    let provider = DeepSeekProvider::new(config).unwrap();
    CompletionClient::new(Arc::new(provider), GenerationOptions::default())
}

async fn analyze(client: &CompletionClient) -> AnalysisText {
    let prompt = build_prompt(&TradingPair::in_default_currency("btc"), &MarketRecord::default());
    client.analyze(&prompt).await
}

#[tokio::test]
async fn first_choice_content_is_returned_verbatim() {
    let server = StubServer::start(Canned::json(200, ANSWER)).await;
    let client = client(&server, Duration::from_secs(5));

    let text = analyze(&client).await;
    assert_eq!(text, AnalysisText::Generated("1. Trend: up\n2. Support: 48k".into()));
}

#[tokio::test]
async fn request_is_authorized_chat_completion() {
    let server = StubServer::start(Canned::json(200, ANSWER)).await;
    let client = client(&server, Duration::from_secs(5));

    analyze(&client).await;

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    let raw = &requests[0];
    assert!(raw.starts_with("POST /v1/chat/completions "), "{raw}");
    assert!(raw.to_lowercase().contains("authorization: bearer sk-test"));

    let body_start = raw.find("\r\n\r\n").unwrap() + 4;
    let body: serde_json::Value = serde_json::from_str(&raw[body_start..]).unwrap();
    assert_eq!(body["model"], "deepseek-chat");
    assert_eq!(body["max_tokens"], 600);
    assert_eq!(body["messages"].as_array().unwrap().len(), 1);
    assert_eq!(body["messages"][0]["role"], "user");
    assert!(body["messages"][0]["content"].as_str().unwrap().contains("BTC/USD"));
}

#[tokio::test]
async fn server_error_falls_back() {
    let server = StubServer::start(Canned::json(503, r#"{"error": "overloaded"}"#)).await;
    let client = client(&server, Duration::from_secs(5));

    let text = analyze(&client).await;
    assert_eq!(text, AnalysisText::Unavailable);
    assert_eq!(text.as_str(), ANALYSIS_UNAVAILABLE);
}

#[tokio::test]
async fn malformed_json_falls_back() {
    for body in ["{\"choices\": [", r#"{"choices": []}"#, r#"{"choices": [{"message": {}}]}"#] {
        let server = StubServer::start(Canned::json(200, body)).await;
        let client = client(&server, Duration::from_secs(5));

        assert_eq!(analyze(&client).await.as_str(), ANALYSIS_UNAVAILABLE, "body: {body}");
    }
}

#[tokio::test]
async fn timeout_falls_back() {
    let server = StubServer::start(Canned::json(200, ANSWER).delayed(Duration::from_secs(3))).await;
    let client = client(&server, Duration::from_millis(200));

    assert_eq!(analyze(&client).await.as_str(), ANALYSIS_UNAVAILABLE);
}

#[tokio::test]
async fn rejected_key_falls_back() {
    let server = StubServer::start(Canned::json(401, r#"{"error": "invalid api key"}"#)).await;
    let client = client(&server, Duration::from_secs(5));

    assert!(analyze(&client).await.is_unavailable());
}
