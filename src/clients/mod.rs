//! Outbound text-generation clients.

use async_trait::async_trait;
use thiserror::Error;

pub mod gemini;

pub use gemini::GeminiClient;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("model endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("prompt blocked by the model: {0}")]
    Blocked(String),

    #[error("model returned no text")]
    EmptyResponse,

    #[error("invalid client configuration: {0}")]
    Config(String),
}

/// A single-turn text completion backend.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}
