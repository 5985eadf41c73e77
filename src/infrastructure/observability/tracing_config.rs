/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub level: String,
    pub json_format: bool,
}

impl TracingConfig {
    /// Default filter when `RUST_LOG` is unset.
    pub fn default_filter(&self) -> String {
        format!(
            "{level},pdf_summarizer={level},tower_http={level}",
            level = self.level
        )
    }
}
