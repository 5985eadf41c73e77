mod health;
mod summarize;

pub use health::{health_handler, root_handler};
pub use summarize::{ErrorResponse, SummaryResponse, summarize_handler};
