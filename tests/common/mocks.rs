use async_trait::async_trait;
use legal_relay::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatCompletionResponse, Choice, LlmClient},
};
use std::sync::{Arc, Mutex};

/// Records every request and answers from a script, or always fails.
#[derive(Debug, Clone)]
pub struct MockLlmClient {
    pub responses: Arc<Mutex<Vec<ChatCompletionResponse>>>,
    pub requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
    pub error: Option<String>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<ChatCompletionResponse>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.with_responses(vec![create_mock_chat_response(text)])
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Content of the single user message of each recorded request.
    pub fn prompts(&self) -> Vec<String> {
        self.get_requests()
            .into_iter()
            .map(|r| {
                assert_eq!(r.messages.len(), 1, "relay sends exactly one message");
                r.messages[0].content.clone()
            })
            .collect()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::upstream(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::upstream("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_mock_chat_response(content: &str) -> ChatCompletionResponse {
    ChatCompletionResponse {
        model: "test-model".to_string(),
        choices: vec![Choice::text(content)],
    }
}

pub fn create_empty_chat_response() -> ChatCompletionResponse {
    ChatCompletionResponse {
        model: "test-model".to_string(),
        choices: vec![],
    }
}

/// A response whose only choice was withheld by the endpoint's safety filter.
pub fn create_blocked_chat_response() -> ChatCompletionResponse {
    ChatCompletionResponse {
        model: "test-model".to_string(),
        choices: vec![Choice {
            content: None,
            finish_reason: Some("ContentFilter".to_string()),
        }],
    }
}
