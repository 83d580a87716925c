//! Language-model client seam.
//!
//! Both the interpretation step and the reply generation step talk to the
//! model through `LlmClient`, so tests can script its answers.

use async_trait::async_trait;
use thiserror::Error;

/// A single completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmRequest {
    /// Standing instruction for the model. May be empty.
    pub system: String,
    /// The turn-specific content.
    pub user: String,
}

impl LlmRequest {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }
}

/// Text completion backend.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, request: LlmRequest) -> Result<String, LlmError>;
}

/// LLM errors.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("http error: {0}")]
    Http(String),
    #[error("response error: {0}")]
    Response(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}
