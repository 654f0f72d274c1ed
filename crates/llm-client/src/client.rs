//! OpenAI-compatible chat client.
//!
//! Works against any OpenAI-compatible `/chat/completions` endpoint,
//! including Ollama's (`http://host:11434/v1`).

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};

use crate::error::LlmError;

/// A single prompt exchange sent to a model.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Fixed instruction template
    pub system: String,
    /// Caller-supplied content
    pub user: String,
    /// Sampling temperature; the pipeline wants near-deterministic output
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            temperature: 0.1,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature.clamp(0.0, 2.0);
        self
    }
}

/// Seam for the two model roles (primary analysis, secondary validation).
///
/// The service holds `Arc<dyn LanguageModel>` handles built once at startup;
/// tests substitute [`crate::MockModel`].
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Model identifier, for logging.
    fn id(&self) -> &str;

    /// Send one completion request and return the raw completion text.
    ///
    /// No contract on response shape is enforced here; callers parse
    /// defensively.
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError>;
}

/// HTTP client for an OpenAI-compatible chat endpoint.
pub struct OpenAiCompatibleClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl OpenAiCompatibleClient {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
    ) -> Result<Self, LlmError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| LlmError::Unreachable(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key,
            model: model.into(),
        })
    }

    /// Client for a local Ollama server exposing the OpenAI-compatible API.
    pub fn ollama(host: &str, model: &str) -> Result<Self, LlmError> {
        Self::new(format!("{}/v1", host.trim_end_matches('/')), model, None)
    }

    fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: MessageResponse,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    content: Option<String>,
}

#[async_trait]
impl LanguageModel for OpenAiCompatibleClient {
    fn id(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        let chat_request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: request.system,
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: request.user,
                },
            ],
            temperature: request.temperature,
            stream: false,
        };

        let mut http_request = self.client.post(self.chat_completions_url());
        if let Some(key) = &self.api_key {
            http_request = http_request.header(header::AUTHORIZATION, format!("Bearer {}", key));
        }

        tracing::debug!(model = %self.model, "Sending completion request");

        let response = http_request
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| LlmError::Unreachable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::RequestFailed { status, body });
        }

        let body = response.text().await.map_err(|e| LlmError::Unreachable(e.to_string()))?;
        let chat_response: ChatResponse =
            serde_json::from_str(&body).map_err(|e| LlmError::malformed(e.to_string(), &body))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| LlmError::malformed("No choices in response", &body))?;

        Ok(content)
    }
}
