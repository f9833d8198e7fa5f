// ABOUTME: OpenAI-compatible chat completion provider for local and cloud endpoints
// ABOUTME: Maps transport and HTTP failures onto the coach's four error categories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # `OpenAI`-Compatible Provider
//!
//! Works with any endpoint implementing `POST {base_url}/chat/completions`,
//! including Ollama (<http://localhost:11434/v1>), vLLM, `LocalAI`, and
//! hosted services.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use super::{ChatError, ChatMessage, ChatRequest, ChatResponse, LlmProvider};
use crate::config::LlmConfig;
use crate::errors::{AppError, AppResult};

/// Connection timeout, separate from the whole-request timeout
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Longest body excerpt kept in error messages
const ERROR_BODY_EXCERPT: usize = 200;

// ============================================================================
// API Request/Response Types (OpenAI-compatible format)
// ============================================================================

#[derive(Debug, Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    messages: Vec<OpenAiMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct OpenAiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> From<&'a ChatMessage> for OpenAiMessage<'a> {
    fn from(msg: &'a ChatMessage) -> Self {
        Self {
            role: msg.role.as_str(),
            content: &msg.content,
        }
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
}

// ============================================================================
// Provider Configuration
// ============================================================================

/// Configuration for the `OpenAI`-compatible provider
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleConfig {
    /// Base URL for the API (e.g., <http://localhost:11434/v1>)
    pub base_url: String,
    /// API key (optional for local servers)
    pub api_key: Option<String>,
    /// Default model to use
    pub default_model: String,
    /// Provider name for logging
    pub provider_name: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
}

impl From<&LlmConfig> for OpenAiCompatibleConfig {
    fn from(config: &LlmConfig) -> Self {
        // Port-based guess for nicer log lines
        let provider_name = if config.base_url.contains(":11434") {
            "ollama"
        } else if config.base_url.contains(":8000") {
            "vllm"
        } else if config.base_url.contains(":8080") {
            "localai"
        } else {
            "openai-compatible"
        };
        Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            default_model: config.model.clone(),
            provider_name: provider_name.to_owned(),
            timeout_secs: config.timeout_secs,
        }
    }
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Generic `OpenAI`-compatible LLM provider
pub struct OpenAiCompatibleProvider {
    client: Client,
    config: OpenAiCompatibleConfig,
}

impl OpenAiCompatibleProvider {
    /// Create a new provider with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: OpenAiCompatibleConfig) -> AppResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        info!(
            "Initializing {} provider: base_url={}, model={}",
            config.provider_name, config.base_url, config.default_model
        );
        Ok(Self { client, config })
    }

    /// Create a provider from application configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn from_config(config: &LlmConfig) -> AppResult<Self> {
        Self::new(OpenAiCompatibleConfig::from(config))
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint
        )
    }

    fn add_auth_header(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(ref api_key) = self.config.api_key {
            request.bearer_auth(api_key)
        } else {
            request
        }
    }

    fn classify_send_error(&self, e: &reqwest::Error) -> ChatError {
        if e.is_timeout() {
            ChatError::Timeout(self.config.timeout_secs)
        } else if e.is_connect() || e.is_request() {
            ChatError::NoConnectivity(format!(
                "cannot connect to {} at {}: {e}",
                self.config.provider_name, self.config.base_url
            ))
        } else {
            ChatError::NoConnectivity(e.to_string())
        }
    }

    /// Error from a non-success status, preferring the JSON error detail
    fn parse_error_response(status: reqwest::StatusCode, body: &str) -> ChatError {
        let message = serde_json::from_str::<OpenAiErrorResponse>(body).map_or_else(
            |_| body.chars().take(ERROR_BODY_EXCERPT).collect::<String>(),
            |parsed| parsed.error.message,
        );
        ChatError::Server {
            status: status.as_u16(),
            message,
        }
    }

    /// Extract the completion text from a success body
    fn parse_completion(body: &str, fallback_model: &str) -> Result<ChatResponse, ChatError> {
        let response: OpenAiResponse = serde_json::from_str(body).map_err(|e| {
            ChatError::InvalidResponse(format!(
                "{e}: {}",
                body.chars().take(ERROR_BODY_EXCERPT).collect::<String>()
            ))
        })?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ChatError::InvalidResponse("response has no choices".to_owned()))?;

        let content = choice
            .message
            .content
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| ChatError::InvalidResponse("response has no content".to_owned()))?;

        Ok(ChatResponse {
            content,
            model: response.model.unwrap_or_else(|| fallback_model.to_owned()),
            finish_reason: choice.finish_reason,
        })
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &str {
        &self.config.provider_name
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }

    #[instrument(skip(self, request), fields(provider = %self.config.provider_name))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        let model = request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model);

        let body = OpenAiRequest {
            model,
            messages: request.messages.iter().map(OpenAiMessage::from).collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            stream: false,
        };
        debug!(
            "Sending chat completion request with {} messages",
            body.messages.len()
        );

        let response = self
            .add_auth_header(self.client.post(self.api_url("chat/completions")))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to {}: {}", self.config.provider_name, e);
                self.classify_send_error(&e)
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                ChatError::Timeout(self.config.timeout_secs)
            } else {
                ChatError::InvalidResponse(format!("failed to read response: {e}"))
            }
        })?;

        if !status.is_success() {
            error!("Chat endpoint returned {}", status);
            return Err(Self::parse_error_response(status, &text));
        }

        Self::parse_completion(&text, model)
    }
}
