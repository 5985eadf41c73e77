mod api_key;
mod llm_client;
mod text_extractor;

pub use api_key::ApiKey;
pub use llm_client::{LlmClient, LlmClientError};
pub use text_extractor::{TextExtractor, TextExtractorError};
