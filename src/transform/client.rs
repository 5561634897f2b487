//! Chat-completion transport for OpenAI-compatible backends.
//!
//! Works with any provider that speaks the OpenAI chat-completion wire
//! format: hosted Typhoon/OpenAI endpoints as well as local servers such as
//! LM Studio, Ollama, and vLLM.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::time::Duration;

use super::error::TransformError;
use super::mode::Mode;
use crate::config::Configuration;

/// Seam between the orchestrator and the HTTP transport.
///
/// The orchestrator only depends on this trait, so transformation flows can
/// be exercised against a simulated backend without a network.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Sends a prompt and returns the transformed text.
    async fn send(
        &self,
        prompt: &str,
        mode: Mode,
        config: &Configuration,
    ) -> Result<String, TransformError>;
}

// Cow avoids cloning the prompt, which is only borrowed for serialization
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for a chat-completion endpoint.
pub struct ChatClient {
    client: Client,
}

impl ChatClient {
    /// Builds a client from the resolved configuration.
    ///
    /// The underlying HTTP client carries the per-request timeout from the
    /// configuration; a default client is the last-resort fallback if the
    /// builder fails.
    pub fn from_config(config: &Configuration) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }
}

#[async_trait]
impl ChatBackend for ChatClient {
    /// Issues a single POST to `{base_url}/chat/completions`.
    ///
    /// Fails fast with [`TransformError::MissingCredentials`] before any
    /// network traffic when no API key is set and the endpoint is not a
    /// local server. No retry is attempted at this layer.
    async fn send(
        &self,
        prompt: &str,
        mode: Mode,
        config: &Configuration,
    ) -> Result<String, TransformError> {
        if config.missing_credentials() {
            return Err(TransformError::MissingCredentials);
        }

        let url = format!("{}/chat/completions", config.base_url);

        let body = ChatCompletionRequest {
            model: &config.model,
            messages: vec![Message {
                role: "user",
                content: Cow::Borrowed(prompt),
            }],
            temperature: mode.temperature(),
            max_tokens: mode.max_tokens(),
        };

        // An empty bearer token is intentional for local servers
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", config.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                TransformError::TransportFailure(format!(
                    "Failed to connect to API endpoint {url}: {e}"
                ))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .ok()
                .and_then(|envelope| envelope.error)
                .and_then(|error| error.message)
                .unwrap_or_else(|| format!("API request failed with status {status}"));
            return Err(TransformError::TransportFailure(message));
        }

        let payload: ChatCompletionResponse = response.json().await.map_err(|e| {
            TransformError::MalformedResponse(format!(
                "Invalid response from AI model: not a chat completion body ({e})"
            ))
        })?;

        let content = payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .ok_or_else(|| {
                TransformError::MalformedResponse(
                    "Invalid response from AI model: missing choices[0].message.content"
                        .to_string(),
                )
            })?;

        Ok(content.trim().to_string())
    }
}
