const MAX_VISIBLE_CHARS: usize = 100;

/// Shortens user-supplied prompt text and masks credentials before it is logged.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let visible = if total_chars > MAX_VISIBLE_CHARS {
        let head: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{head}... ({total_chars} chars total)")
    } else {
        trimmed.to_string()
    };

    redact_sensitive_patterns(&visible)
}

fn redact_sensitive_patterns(text: &str) -> String {
    const REDACTED: &str = "[REDACTED]";
    const PATTERNS: [&str; 6] = [
        "Bearer ",
        "api_key=",
        "key=",
        "password=",
        "secret=",
        "token=",
    ];

    let mut result = text.to_string();
    for pattern in PATTERNS {
        let mut search_from = 0;
        while let Some(offset) = result[search_from..].find(pattern) {
            let value_start = search_from + offset + pattern.len();
            let value_end = result[value_start..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| value_start + i)
                .unwrap_or(result.len());

            let value = &result[value_start..value_end];
            search_from = if value.is_empty() || value == REDACTED {
                value_end
            } else {
                result.replace_range(value_start..value_end, REDACTED);
                value_start + REDACTED.len()
            };
        }
    }

    result
}
