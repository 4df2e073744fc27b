//! Chat-completion client for the generation service
//!
//! Sends the prompt as a single system message and returns the first
//! choice's text. The model is fixed when the client is built.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::USER_AGENT;
use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::prompt::Prompt;

pub trait GenerationClient {
    /// One-shot generation. The prompt is consumed.
    fn generate(&self, prompt: Prompt) -> Result<String, GenerationError>;
}

#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

impl ChatRequest {
    pub fn system_only(model: &str, prompt: Prompt) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![ChatMessage {
                role: "system".to_string(),
                content: Some(prompt.into_string()),
            }],
        }
    }
}

impl ChatResponse {
    pub fn into_content(self) -> Result<String, GenerationError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(GenerationError::EmptyResponse)
    }
}

pub struct ChatCompletionClient {
    http_client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl ChatCompletionClient {
    pub fn new(
        endpoint: &str,
        model: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| GenerationError::Transport(e.to_string()))?;
        Ok(Self {
            http_client,
            endpoint: endpoint.to_string(),
            model: model.to_string(),
            api_key,
        })
    }

    /// Builds the client from config, reading the token from `api_key_env`.
    /// An empty `api_key_env` means the endpoint needs no token.
    pub fn from_config(config: &GenerationConfig, timeout: Duration) -> Result<Self, GenerationError> {
        let api_key = if config.api_key_env.is_empty() {
            None
        } else {
            let key = std::env::var(&config.api_key_env)
                .map_err(|_| GenerationError::MissingToken(config.api_key_env.clone()))?;
            Some(key)
        };
        Self::new(&config.endpoint, &config.model, api_key, timeout)
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl GenerationClient for ChatCompletionClient {
    fn generate(&self, prompt: Prompt) -> Result<String, GenerationError> {
        let body = ChatRequest::system_only(&self.model, prompt);
        tracing::debug!(model = %self.model, endpoint = %self.endpoint, "Requesting generation");

        let mut request = self.http_client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        let response = request
            .send()
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| GenerationError::Transport(format!("undecodable response: {}", e)))?;
        parsed.into_content()
    }
}
