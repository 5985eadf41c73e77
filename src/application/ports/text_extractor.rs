use async_trait::async_trait;

use crate::domain::ExtractedText;

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        max_pages: usize,
    ) -> Result<ExtractedText, TextExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextExtractorError {
    #[error("invalid PDF: {0}")]
    InvalidDocument(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
