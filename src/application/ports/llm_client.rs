use async_trait::async_trait;

use super::ApiKey;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends one prompt and returns the raw generated text, possibly empty.
    async fn generate(&self, api_key: &ApiKey, prompt: &str) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
