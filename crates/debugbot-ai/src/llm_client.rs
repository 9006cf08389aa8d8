// LLM client abstraction
// The model is an opaque text-in / text-out capability

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Model returned no content")]
    EmptyResponse,

    #[error("Missing API key: {0}")]
    MissingApiKey(&'static str),
}

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate text from prompt
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;

    fn model(&self) -> &str;

    fn provider(&self) -> &str;
}
