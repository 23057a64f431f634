//! Turns a tagged legal-text request into one model call.
//!
//! The relay keeps no state between calls. Everything it holds is fixed at
//! construction from [`LlmConfig`] and only read afterwards, so a single
//! instance is shared by every request handler.

mod task;
mod templates;

pub use task::Task;
pub use templates::build_prompt;

use crate::{
    Error, Result,
    config::LlmConfig,
    llm::{ChatCompletionRequest, ChatMessage, LlmClient, OpenAiClient},
};
use std::sync::Arc;
use tracing::{debug, error, info};
use uuid::Uuid;

pub const TEXT_REQUIRED: &str = "Text is required";

pub struct PromptRelay {
    client: Arc<dyn LlmClient>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl PromptRelay {
    pub fn new(config: &LlmConfig) -> Self {
        info!(
            "Initializing relay for model '{}' via {}",
            config.model, config.base_url
        );
        let client = Arc::new(OpenAiClient::new(config.clone()));
        Self::with_client(client, config)
    }

    /// Builds a relay over an existing client, taking only the generation
    /// options from `config`.
    pub fn with_client(client: Arc<dyn LlmClient>, config: &LlmConfig) -> Self {
        Self {
            client,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    /// Relays `text` under the template for `task_type` and returns the
    /// model's output untouched. Unknown or empty task types send `text` as
    /// the prompt.
    pub async fn relay(&self, task_type: &str, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Err(Error::invalid_input(TEXT_REQUIRED));
        }

        let request_id = Uuid::new_v4();
        let task = Task::from_tag(task_type);
        match task {
            Some(task) => info!(%request_id, %task, "Relaying request"),
            None => info!(
                %request_id,
                task_type,
                "Relaying request without template"
            ),
        }

        let prompt = build_prompt(task, text);
        debug!(%request_id, prompt_len = prompt.len(), "Prompt assembled");

        let request = ChatCompletionRequest {
            messages: vec![ChatMessage::user(prompt)],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = match self.client.create_chat_completion(request).await {
            Ok(response) => response,
            Err(e) => {
                error!(%request_id, "Generation failed: {}", e);
                return Err(e);
            }
        };

        match response.first_text() {
            Some(text) => {
                info!(%request_id, model = %response.model, "Generation succeeded");
                Ok(text.to_string())
            }
            None => {
                let reason = response.first_finish_reason().unwrap_or("none");
                error!(%request_id, finish_reason = reason, "Model returned no text");
                Err(Error::upstream(format!(
                    "model returned no text (finish reason: {})",
                    reason
                )))
            }
        }
    }
}
