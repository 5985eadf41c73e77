use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::application::ports::{ApiKey, LlmClient, LlmClientError};

pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com";
    pub const DEFAULT_MODEL: &'static str = "gemini-2.0-flash";

    pub fn new(base_url: &str, model: &str, timeout: Duration) -> Result<Self, LlmClientError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            LlmClientError::ApiRequestFailed(format!("failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    #[tracing::instrument(
        skip(self, api_key, prompt),
        fields(model = %self.model, prompt_chars = prompt.chars().count())
    )]
    async fn generate(&self, api_key: &ApiKey, prompt: &str) -> Result<String, LlmClientError> {
        let body = serde_json::json!({
            "contents": [
                {
                    "parts": [
                        { "text": prompt }
                    ]
                }
            ]
        });

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(format!("Gemini request: {e}")))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!("Gemini rate limit hit");
            return Err(LlmClientError::RateLimited);
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "Gemini returned {status}: {text}"
            )));
        }

        let raw_bytes = response.bytes().await.map_err(|e| {
            LlmClientError::ApiRequestFailed(format!("Gemini network/read error: {e}"))
        })?;

        let parsed: GenerateContentResponse = serde_json::from_slice(&raw_bytes).map_err(|e| {
            let raw_text = String::from_utf8_lossy(&raw_bytes);
            tracing::error!(raw_response = %raw_text, "Failed to parse Gemini JSON");
            LlmClientError::InvalidResponse(format!("Gemini JSON parse error: {e}"))
        })?;

        Ok(parsed.into_text())
    }
}
