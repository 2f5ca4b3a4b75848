const MAX_VISIBLE_CHARS: usize = 200;

const SENSITIVE_PREFIXES: [&str; 5] = ["Bearer ", "api_key=", "api-key: ", "apiKey=", "sk-"];

/// Prefixes that only count at the start of a word, so `task-queue` stays intact.
const WORD_START_PREFIXES: [&str; 1] = ["sk-"];

/// Sanitizes an upstream error body for safe logging.
pub fn sanitize_upstream_body(body: &str) -> String {
    let trimmed = body.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let visible = if total_chars > MAX_VISIBLE_CHARS {
        let cut = trimmed
            .char_indices()
            .nth(MAX_VISIBLE_CHARS)
            .map(|(idx, _)| idx)
            .unwrap_or(trimmed.len());
        format!("{}... ({} chars total)", &trimmed[..cut], total_chars)
    } else {
        trimmed.to_string()
    };

    redact_sensitive_patterns(&visible)
}

fn redact_sensitive_patterns(text: &str) -> String {
    let mut result = text.to_string();

    for pattern in SENSITIVE_PREFIXES {
        let mut search_from = 0;
        while let Some(found) = result[search_from..].find(pattern) {
            let pattern_start = search_from + found;
            let value_start = pattern_start + pattern.len();
            if WORD_START_PREFIXES.contains(&pattern) && follows_word_char(&result, pattern_start) {
                search_from = value_start;
                continue;
            }
            let value_end = result[value_start..]
                .find(|c: char| c.is_whitespace() || matches!(c, '&' | '"' | '\'' | ',' | '}'))
                .map(|i| value_start + i)
                .unwrap_or(result.len());
            result.replace_range(value_start..value_end, "[REDACTED]");
            search_from = value_start + "[REDACTED]".len();
        }
    }

    result
}

fn follows_word_char(text: &str, index: usize) -> bool {
    text[..index]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}
