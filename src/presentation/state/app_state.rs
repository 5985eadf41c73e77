use std::sync::Arc;

use crate::application::ports::{LlmClient, TextExtractor};
use crate::application::services::SummarizationService;

pub struct AppState<E, L>
where
    E: TextExtractor,
    L: LlmClient,
{
    pub summarization_service: Arc<SummarizationService<E, L>>,
    pub max_upload_bytes: usize,
}

impl<E, L> AppState<E, L>
where
    E: TextExtractor,
    L: LlmClient,
{
    pub fn new(
        summarization_service: Arc<SummarizationService<E, L>>,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            summarization_service,
            max_upload_bytes,
        }
    }
}

impl<E, L> Clone for AppState<E, L>
where
    E: TextExtractor,
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            summarization_service: Arc::clone(&self.summarization_service),
            max_upload_bytes: self.max_upload_bytes,
        }
    }
}
