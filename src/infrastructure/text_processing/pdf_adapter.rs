use async_trait::async_trait;
use lopdf::Document;

use crate::application::ports::{TextExtractor, TextExtractorError};
use crate::domain::ExtractedText;

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Raw text of the first `max_pages` pages in page order, blanks included.
    fn extract_pages(data: &[u8], max_pages: usize) -> Result<Vec<String>, TextExtractorError> {
        let doc = Document::load_mem(data).map_err(|e| {
            TextExtractorError::InvalidDocument(format!("failed to parse PDF: {e}"))
        })?;

        let pages = doc.get_pages();
        let total_pages = pages.len();
        let mut texts = Vec::with_capacity(total_pages.min(max_pages));

        for &page_number in pages.keys().take(max_pages) {
            let text = doc.extract_text(&[page_number]).unwrap_or_else(|e| {
                tracing::warn!(page_number, error = %e, "Page text could not be decoded");
                String::new()
            });
            texts.push(text);
        }

        tracing::debug!(total_pages, visited_pages = texts.len(), "PDF pages read");

        Ok(texts)
    }
}

#[async_trait]
impl TextExtractor for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn extract_text(
        &self,
        data: &[u8],
        max_pages: usize,
    ) -> Result<ExtractedText, TextExtractorError> {
        let data_owned = data.to_vec();

        let pages =
            tokio::task::spawn_blocking(move || Self::extract_pages(&data_owned, max_pages))
                .await
                .map_err(|e| {
                    TextExtractorError::ExtractionFailed(format!("task join error: {e}"))
                })??;

        let text = ExtractedText::from_pages(pages, max_pages);
        tracing::info!(
            page_count = text.page_count(),
            chars = text.as_str().chars().count(),
            "PDF text extraction complete"
        );

        Ok(text)
    }
}
