use scribe_gateway::infrastructure::observability::sanitize_upstream_body;

#[test]
fn given_empty_body_when_sanitizing_then_returns_placeholder() {
    assert_eq!(sanitize_upstream_body("   "), "[EMPTY]");
}

#[test]
fn given_short_body_when_sanitizing_then_returned_trimmed() {
    assert_eq!(sanitize_upstream_body("  bad audio \n"), "bad audio");
}

#[test]
fn given_long_body_when_sanitizing_then_truncated_with_total_length() {
    let body = "x".repeat(500);
    let sanitized = sanitize_upstream_body(&body);

    assert!(sanitized.starts_with(&"x".repeat(200)));
    assert!(sanitized.ends_with("... (500 chars total)"));
}

#[test]
fn given_multibyte_body_when_truncating_then_does_not_split_characters() {
    let body = "語".repeat(300);
    let sanitized = sanitize_upstream_body(&body);

    assert!(sanitized.starts_with(&"語".repeat(200)));
    assert!(sanitized.contains("(300 chars total)"));
}

#[test]
fn given_openai_key_in_body_when_sanitizing_then_key_is_redacted() {
    let body = r#"{"error": {"message": "Incorrect API key provided: sk-abc123"}}"#;
    let sanitized = sanitize_upstream_body(body);

    assert!(!sanitized.contains("abc123"));
    assert!(sanitized.contains("sk-[REDACTED]"));
}

#[test]
fn given_repeated_bearer_tokens_when_sanitizing_then_all_are_redacted() {
    let body = "Bearer one and Bearer two";
    let sanitized = sanitize_upstream_body(body);

    assert_eq!(sanitized, "Bearer [REDACTED] and Bearer [REDACTED]");
}

#[test]
fn given_words_ending_in_sk_when_sanitizing_then_left_intact() {
    let body = "task-queue failed for disk-full";
    assert_eq!(sanitize_upstream_body(body), body);
}

#[test]
fn given_key_after_punctuation_when_sanitizing_then_redacted() {
    let sanitized = sanitize_upstream_body("provided: sk-live123 was rejected");
    assert_eq!(sanitized, "provided: sk-[REDACTED] was rejected");
}
