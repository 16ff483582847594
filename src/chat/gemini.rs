//! Gemini chat-completion client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    chat::{ChatHistory, ChatRole, ChatTurn, CompletionService},
    protocol::error::{A2aError, A2aResult},
};

const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini provider configuration
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for the Generative Language API
    pub api_key: String,

    /// Model identifier
    pub model: String,

    /// API base URL
    pub base_url: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Maximum tokens in the reply
    pub max_output_tokens: u32,

    /// Request timeout
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Create a configuration with default model and sampling settings
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: 0.8,
            max_output_tokens: 8192,
            timeout: Duration::from_secs(60),
        }
    }

    /// Read the API key from the `GEMINI_API_KEY` environment variable
    ///
    /// A missing key is a fatal configuration error, raised before any
    /// request is made.
    pub fn from_env() -> A2aResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| {
            A2aError::Config("GEMINI_API_KEY environment variable is not set".into())
        })?;
        Ok(Self::new(api_key))
    }

    /// Set the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the API base URL (used for testing against local servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Chat-completion client for the Gemini `generateContent` API
pub struct GeminiChat {
    config: GeminiConfig,
    client: Client,
}

impl GeminiChat {
    /// Create a new Gemini client
    pub fn new(config: GeminiConfig) -> A2aResult<Self> {
        if config.api_key.is_empty() {
            return Err(A2aError::Config("Gemini API key is required".into()));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| A2aError::Connection(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Create a client configured from the environment
    pub fn from_env() -> A2aResult<Self> {
        Self::new(GeminiConfig::from_env()?)
    }

    fn build_request(&self, history: &ChatHistory) -> GenerateContentRequest {
        let contents = history
            .turns()
            .iter()
            .map(|turn| GeminiContent {
                role: match turn.role {
                    ChatRole::User => "user".to_string(),
                    ChatRole::Assistant => "model".to_string(),
                },
                parts: vec![GeminiPart {
                    text: turn.content.clone(),
                }],
            })
            .collect();

        GenerateContentRequest {
            contents,
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_output_tokens,
            },
        }
    }

    fn parse_response(response: GenerateContentResponse) -> A2aResult<ChatTurn> {
        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| A2aError::Protocol("No candidates returned from Gemini".into()))?;

        let text: String = candidate
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect();

        Ok(ChatTurn::assistant(text))
    }
}

#[async_trait]
impl CompletionService for GeminiChat {
    async fn complete(&self, history: &ChatHistory) -> A2aResult<ChatTurn> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );
        let request = self.build_request(history);

        debug!(model = %self.config.model, turns = history.len(), "requesting completion");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(A2aError::Protocol(format!(
                "Gemini API error {}: {}",
                status, body
            )));
        }

        let payload: GenerateContentResponse = response.json().await?;
        Self::parse_response(payload)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}
