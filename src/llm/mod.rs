//! Seam between the station and the upstream model provider.
//!
//! The engine only ever talks to a [`ModelBackend`]; the production
//! implementation is [`openai::OpenAiClient`], tests substitute their own.

pub mod openai;

pub use openai::OpenAiClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One entry of a chat completion conversation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role (`system`, `user`, `assistant`).
    pub role: String,
    /// Message body.
    pub content: String,
}

impl ChatMessage {
    /// Build a `system` role message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Build a `user` role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Errors surfaced by a model backend.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Transport-level HTTP failure.
    #[error("http request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    /// The provider answered with a non-success status.
    #[error("provider returned status {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned.
        body: String,
    },
    /// A completion response carried no choices.
    #[error("completion response contained no choices")]
    EmptyResponse,
}

/// Upstream completion and speech provider.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Issue one chat completion and return the first choice's text.
    async fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String, LlmError>;

    /// Synthesize speech for `input` and return the raw audio payload.
    async fn synthesize_speech(
        &self,
        model: &str,
        voice: &str,
        input: &str,
    ) -> Result<Vec<u8>, LlmError>;
}
