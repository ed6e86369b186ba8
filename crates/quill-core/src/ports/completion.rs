//! Text completion port - abstraction over hosted LLM providers.

use async_trait::async_trait;

/// Prompt in, generated text out.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Generate a continuation for `prompt`.
    ///
    /// Implementations must return an error rather than placeholder text when
    /// the provider cannot be reached or rejects the request.
    async fn generate_text(&self, prompt: &str) -> Result<String, CompletionError>;
}

/// Completion errors.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("Completion provider is not configured")]
    NotConfigured,

    #[error("Failed to reach completion provider: {0}")]
    Transport(String),

    #[error("Completion provider returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Invalid completion response: {0}")]
    InvalidResponse(String),
}
