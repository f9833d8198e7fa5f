// ABOUTME: LLM provider abstraction for the chat coach
// ABOUTME: Message types, failure categories, and the provider trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # LLM Provider Interface
//!
//! The coach talks to any chat completion endpoint through [`LlmProvider`].
//! Failures are reduced to four categories in [`ChatError`], each with a
//! message fit to show the user as is.
//!
//! ```rust,no_run
//! use pulsefit::llm::{ChatMessage, ChatRequest, LlmProvider};
//!
//! async fn example(provider: &dyn LlmProvider) {
//!     let request = ChatRequest::new(vec![
//!         ChatMessage::system("You are a friendly fitness coach."),
//!         ChatMessage::user("How should I warm up before a jog?"),
//!     ]);
//!     let response = provider.complete(&request).await;
//! }
//! ```

mod openai_compatible;
/// System prompts loaded at compile time
pub mod prompts;

pub use openai_compatible::{OpenAiCompatibleConfig, OpenAiCompatibleProvider};

use crate::errors::{AppError, ErrorCode};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Message Types
// ============================================================================

/// Role of a message in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction message
    System,
    /// User input message
    User,
    /// Assistant response message
    Assistant,
}

impl MessageRole {
    /// Convert to string representation for API calls
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single message in a chat conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: MessageRole,
    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a new chat message
    #[must_use]
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Create a user message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }
}

/// Configuration for a chat completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
    /// Model identifier (provider-specific)
    pub model: Option<String>,
    /// Temperature for response randomness (0.0 - 2.0)
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Create a new chat request with messages
    #[must_use]
    pub const fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: None,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Set the model to use
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum tokens
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Response from a chat completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated message content
    pub content: String,
    /// Model used for generation
    pub model: String,
    /// Finish reason (stop, length, etc.)
    pub finish_reason: Option<String>,
}

// ============================================================================
// Errors
// ============================================================================

/// Why a chat completion failed
#[derive(Debug, Error)]
pub enum ChatError {
    /// The endpoint could not be reached
    #[error("cannot reach chat service: {0}")]
    NoConnectivity(String),

    /// The request did not finish in time
    #[error("chat request timed out after {0} s")]
    Timeout(u64),

    /// The endpoint answered with an error status
    #[error("chat service returned {status}: {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error detail from the response body
        message: String,
    },

    /// The endpoint answered with something that is not a usable completion
    #[error("invalid chat response: {0}")]
    InvalidResponse(String),
}

impl ChatError {
    /// Message suitable for showing to the user
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::NoConnectivity(_) => {
                "No connection to the coach. Check your internet connection and try again."
            }
            Self::Timeout(_) => "The coach took too long to answer. Please try again.",
            Self::Server { .. } => {
                "The coach service is having problems right now. Please try again later."
            }
            Self::InvalidResponse(_) => {
                "The coach sent an answer we couldn't read. Please try again."
            }
        }
    }
}

impl From<ChatError> for AppError {
    fn from(error: ChatError) -> Self {
        let code = match error {
            ChatError::NoConnectivity(_) => ErrorCode::ExternalServiceUnavailable,
            ChatError::Timeout(_) => ErrorCode::ExternalServiceTimeout,
            ChatError::Server { .. } | ChatError::InvalidResponse(_) => {
                ErrorCode::ExternalServiceError
            }
        };
        Self::new(code, error.user_message()).with_source(error)
    }
}

// ============================================================================
// Provider Trait
// ============================================================================

/// Chat completion provider
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Unique provider identifier (e.g., "ollama", "openai")
    fn name(&self) -> &str;

    /// Default model to use if not specified in request
    fn default_model(&self) -> &str;

    /// Perform a chat completion
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError>;
}
