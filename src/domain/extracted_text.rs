pub const PAGE_SEPARATOR: &str = "\n\n";

/// Text of the non-blank leading pages, joined with [`PAGE_SEPARATOR`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText {
    text: String,
    page_count: usize,
}

impl ExtractedText {
    /// Visits at most `max_pages` leading pages and keeps the non-blank ones.
    pub fn from_pages<I, S>(pages: I, max_pages: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let kept: Vec<String> = pages
            .into_iter()
            .take(max_pages)
            .map(Into::into)
            .filter(|page| !page.trim().is_empty())
            .collect();

        Self {
            page_count: kept.len(),
            text: kept.join(PAGE_SEPARATOR),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
