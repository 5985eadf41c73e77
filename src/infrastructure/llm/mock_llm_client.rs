use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{ApiKey, LlmClient, LlmClientError};

/// Canned replies with a record of every prompt it was sent.
pub struct MockLlmClient {
    reply: Option<String>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockLlmClient {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails as if the provider were down.
    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn generate(&self, _api_key: &ApiKey, prompt: &str) -> Result<String, LlmClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        self.reply
            .clone()
            .ok_or_else(|| LlmClientError::ApiRequestFailed("mock provider unavailable".to_string()))
    }
}
