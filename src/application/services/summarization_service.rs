use std::sync::Arc;

use crate::application::ports::{
    ApiKey, LlmClient, LlmClientError, TextExtractor, TextExtractorError,
};
use crate::domain::{Prompt, Summary, SummaryLimits, SummaryMode, SummaryModeError, Upload};

pub struct SummarizationService<E, L>
where
    E: TextExtractor,
    L: LlmClient,
{
    extractor: Arc<E>,
    llm_client: Arc<L>,
    api_key: Option<ApiKey>,
    limits: SummaryLimits,
}

impl<E, L> SummarizationService<E, L>
where
    E: TextExtractor,
    L: LlmClient,
{
    pub fn new(
        extractor: Arc<E>,
        llm_client: Arc<L>,
        api_key: Option<ApiKey>,
        limits: SummaryLimits,
    ) -> Self {
        Self {
            extractor,
            llm_client,
            api_key,
            limits,
        }
    }

    pub fn limits(&self) -> SummaryLimits {
        self.limits
    }

    /// Content-type check, extraction, mode validation, then the provider call.
    #[tracing::instrument(
        skip(self, upload, custom_prompt),
        fields(filename = %upload.filename, bytes = upload.size_bytes())
    )]
    pub async fn summarize_upload(
        &self,
        upload: &Upload,
        prompt_type: &str,
        custom_prompt: Option<&str>,
    ) -> Result<Summary, SummarizeError> {
        if !upload.is_pdf() {
            return Err(SummarizeError::UnsupportedContentType(
                upload.content_type.clone().unwrap_or_default(),
            ));
        }

        let text = self
            .extractor
            .extract_text(&upload.data, self.limits.max_pages)
            .await
            .map_err(SummarizeError::Extraction)?;

        if text.is_blank() {
            return Err(SummarizeError::NoReadableText);
        }

        let mode = SummaryMode::parse(prompt_type, custom_prompt)?;

        self.summarize_text(text.as_str(), &mode).await
    }

    pub async fn summarize_text(
        &self,
        text: &str,
        mode: &SummaryMode,
    ) -> Result<Summary, SummarizeError> {
        if text.trim().is_empty() {
            return Err(SummarizeError::NoContent);
        }

        let api_key = self
            .api_key
            .as_ref()
            .ok_or(SummarizeError::MissingCredential)?;

        let prompt = Prompt::build(mode, text, self.limits.max_chars);

        tracing::debug!(
            mode = %mode,
            prompt_chars = prompt.as_str().chars().count(),
            "Requesting summary"
        );

        let raw = self
            .llm_client
            .generate(api_key, prompt.as_str())
            .await
            .map_err(SummarizeError::Provider)?;

        let summary = Summary::from_response(&raw).ok_or(SummarizeError::EmptySummary)?;

        tracing::info!(
            mode = %mode,
            summary_chars = summary.as_str().chars().count(),
            "Summary generated"
        );

        Ok(summary)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizeError {
    #[error("Please upload a PDF file.")]
    UnsupportedContentType(String),
    #[error("Could not read PDF: {0}")]
    Extraction(TextExtractorError),
    #[error("No readable text found in the PDF.")]
    NoReadableText,
    #[error("{0}")]
    InvalidMode(#[from] SummaryModeError),
    #[error("No text provided for summarization.")]
    NoContent,
    #[error("GEMINI_API_KEY environment variable is not set. Set it before running the app.")]
    MissingCredential,
    #[error("Something went wrong while calling the Gemini API: {0}")]
    Provider(LlmClientError),
    #[error("Something went wrong while calling the Gemini API: no summary text was returned")]
    EmptySummary,
}

impl SummarizeError {
    /// Errors the caller can fix by changing the request or the deployment config.
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::UnsupportedContentType(_)
            | Self::NoReadableText
            | Self::InvalidMode(_)
            | Self::NoContent
            | Self::MissingCredential => true,
            Self::Extraction(_) | Self::Provider(_) | Self::EmptySummary => false,
        }
    }
}
