mod extracted_text;
mod prompt;
mod summary;
mod summary_limits;
mod summary_mode;
mod upload;

pub use extracted_text::{ExtractedText, PAGE_SEPARATOR};
pub use prompt::{Prompt, truncate_chars};
pub use summary::Summary;
pub use summary_limits::{DEFAULT_MAX_CHARS, DEFAULT_MAX_PAGES, SummaryLimits};
pub use summary_mode::{DEFAULT_PROMPT_TYPE, SummaryMode, SummaryModeError, VALID_PROMPT_TYPES};
pub use upload::Upload;
