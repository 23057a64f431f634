use super::MockLlmClient;
use legal_relay::{config::LlmConfig, relay::PromptRelay, server};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;

/// LLM configuration with a usable key and no generation options.
pub fn create_test_llm_config() -> LlmConfig {
    LlmConfig {
        api_key: "test-api-key".to_string(),
        ..LlmConfig::default()
    }
}

pub fn create_test_relay(mock: &MockLlmClient) -> PromptRelay {
    PromptRelay::with_client(Arc::new(mock.clone()), &create_test_llm_config())
}

pub fn create_test_app(mock: &MockLlmClient) -> Router {
    server::router(Arc::new(create_test_relay(mock)))
}

pub fn json_request(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Writes `content` to a `config.yaml` inside a fresh temp directory.
pub fn create_test_config_file(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, content).expect("Failed to write config file");
    (dir, path)
}

pub const SAMPLE_CONFIG_YAML: &str = r#"
llm:
  provider: gemini
  base_url: "http://localhost:9999/v1beta/openai"
  api_key: "file-key"
  model: gemini-2.5-flash
  temperature: 0.2
  max_tokens: 1024
server:
  host: "127.0.0.1"
  port: 3000
  logs:
    level: debug
"#;
