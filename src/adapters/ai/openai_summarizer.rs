//! OpenAI-compatible summarizer - calls a chat-completions endpoint.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAiConfig::new(api_key)
//!     .with_model("gpt-4o-mini")
//!     .with_base_url("https://api.openai.com/v1");
//!
//! let summarizer = OpenAiSummarizer::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::prep::PrepTimeDecision;
use crate::ports::{SummaryError, Summarizer};

const SYSTEM_PROMPT: &str = "You are an operations assistant for a restaurant kitchen. \
     You explain recent prep-time adjustments to the kitchen manager in plain language.";

/// Configuration for the OpenAI-compatible summarizer.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g., "gpt-4o-mini").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenAiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Summarizer backed by an OpenAI-compatible chat-completions API.
pub struct OpenAiSummarizer {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiSummarizer {
    /// Creates a new summarizer with the given configuration.
    pub fn new(config: OpenAiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Renders the decisions into the user prompt, oldest first.
    fn build_prompt(decisions: &[PrepTimeDecision]) -> String {
        let mut prompt = String::from("Recent prep time decisions:\n");
        for decision in decisions {
            prompt.push_str(&decision.summary_line());
            prompt.push('\n');
        }
        prompt.push_str(
            "\nSummarize the recent prep-time adjustments for the kitchen manager \
             in two or three sentences.",
        );
        prompt
    }

    /// Sends the request and maps transport failures.
    async fn send_request(&self, decisions: &[PrepTimeDecision]) -> Result<Response, SummaryError> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: Self::build_prompt(decisions),
                },
            ],
            max_tokens: Some(300),
            temperature: Some(0.3),
        };

        self.client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SummaryError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    SummaryError::unavailable(format!("Connection failed: {}", e))
                } else {
                    SummaryError::unavailable(e.to_string())
                }
            })
    }

    /// Maps the response status to our error taxonomy.
    async fn handle_response_status(response: Response) -> Result<Response, SummaryError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(SummaryError::AuthenticationFailed),
            _ => Err(SummaryError::unavailable(format!(
                "status {}: {}",
                status, error_body
            ))),
        }
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    async fn summarize(&self, decisions: &[PrepTimeDecision]) -> Result<String, SummaryError> {
        let response = self.send_request(decisions).await?;
        let response = Self::handle_response_status(response).await?;

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| SummaryError::Parse(e.to_string()))?;

        let choice = body
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| SummaryError::Parse("response contained no choices".to_string()))?;

        Ok(choice.message.content)
    }
}

/// Request body for the chat completions API.
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Response body from the chat completions API.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}
