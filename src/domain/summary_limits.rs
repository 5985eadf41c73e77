pub const DEFAULT_MAX_PAGES: usize = 20;
pub const DEFAULT_MAX_CHARS: usize = 8000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryLimits {
    /// Leading pages visited during extraction; later pages are never read.
    pub max_pages: usize,
    /// Characters of extracted text that make it into the prompt.
    pub max_chars: usize,
}

impl Default for SummaryLimits {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}
