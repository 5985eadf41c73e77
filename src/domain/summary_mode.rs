use std::fmt;

pub const DEFAULT_PROMPT_TYPE: &str = "medium";
pub const VALID_PROMPT_TYPES: [&str; 4] = ["short", "medium", "long", "custom"];

/// Requested summary style. A custom mode always carries its instruction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SummaryMode {
    Short,
    #[default]
    Medium,
    Long,
    Custom(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SummaryModeError {
    #[error("Invalid prompt_type. Must be one of: {}", VALID_PROMPT_TYPES.join(", "))]
    InvalidMode(String),
    #[error("Custom prompt is required when prompt_type is 'custom'")]
    MissingCustomPrompt,
}

impl SummaryMode {
    /// Parses the form values. A custom prompt of only whitespace is rejected as missing,
    /// so `Custom` never carries an empty instruction.
    pub fn parse(
        prompt_type: &str,
        custom_prompt: Option<&str>,
    ) -> Result<Self, SummaryModeError> {
        match prompt_type {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            "custom" => custom_prompt
                .filter(|p| !p.trim().is_empty())
                .map(|p| Self::Custom(p.to_string()))
                .ok_or(SummaryModeError::MissingCustomPrompt),
            other => Err(SummaryModeError::InvalidMode(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
            Self::Custom(_) => "custom",
        }
    }

    pub fn instruction(&self) -> &str {
        match self {
            Self::Short => "Provide a very brief summary (2-3 sentences) of this text:",
            Self::Medium => {
                "Summarize this content in clear, simple English. Use short paragraphs and bullet points if helpful:"
            }
            Self::Long => {
                "Provide a detailed summary of this content, covering all key points. Use clear section headers and bullet points:"
            }
            Self::Custom(instruction) => instruction,
        }
    }
}

impl fmt::Display for SummaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
