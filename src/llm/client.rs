//! HTTP client for the chat-completions backend
//!
//! POST <base_url>/v1/chat/completions with bearer authorization and a
//! fixed sampling temperature. Missing choices or empty content is a
//! hard error, as is any transport failure; both resolve to French
//! display strings the failure-marker scan recognizes.

use crate::errors::{AssistantError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default backend host
const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Default model identifier
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Request timeout for one completion call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Fixed sampling temperature for all requests
const TEMPERATURE: f64 = 0.4;

/// One message in a chat-completions conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// Build a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Build a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Backend connection settings
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl LlmConfig {
    /// Build a configuration with the default request timeout
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: model.into(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Read configuration from the environment
    ///
    /// `OPENAI_API_KEY` is required; without it the backend is
    /// disabled and `None` is returned. `OPENAI_BASE_URL` and
    /// `OPENAI_MODEL` fall back to fixed defaults.
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("OPENAI_API_KEY").ok().filter(|key| !key.is_empty())?;

        Some(Self {
            api_key,
            base_url: env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            model: env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            timeout: REQUEST_TIMEOUT,
        })
    }
}

/// HTTP client for the generation backend
pub struct LlmClient {
    client: Client,
    config: LlmConfig,
}

impl LlmClient {
    /// Create a client from explicit configuration
    pub fn new(config: LlmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| AssistantError::ConfigError(format!("failed to build HTTP client: {err}")))?;
        Ok(Self { client, config })
    }

    /// Model identifier this client requests
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Generate one completion for the given conversation
    ///
    /// Returns the trimmed content of the first choice. An empty
    /// choice list or missing content is a hard error.
    pub async fn generate(&self, messages: &[ChatMessage]) -> Result<String> {
        let url = format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        let request = CompletionRequest {
            model: &self.config.model,
            messages,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let parsed: CompletionResponse = response.json().await?;
        let choice = parsed.choices.into_iter().next().ok_or(AssistantError::EmptyResponse)?;
        let content = choice
            .message
            .content
            .filter(|content| !content.trim().is_empty())
            .ok_or(AssistantError::MissingContent)?;

        Ok(content.trim().to_string())
    }
}
