mod summarization_service;

pub use summarization_service::{SummarizationService, SummarizeError};
