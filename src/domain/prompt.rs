use super::SummaryMode;

/// Instruction, a blank line, then the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    pub fn build(mode: &SummaryMode, text: &str, max_chars: usize) -> Self {
        Self(format!(
            "{}\n\n{}",
            mode.instruction(),
            truncate_chars(text, max_chars)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Hard cut after `max_chars` characters, never inside a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
