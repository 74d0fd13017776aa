// Sanitization utilities

/// Sanitize HTML fragments coming from the gateway before rendering them
/// unescaped. Plain text fields go through askama's auto-escaping instead.
pub fn sanitize_html(text: &str) -> String {
    ammonia::clean(text)
}

/// Truncate text to a maximum length
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.len() <= max_len {
        text.to_string()
    } else {
        format!("{}...", &text[..max_len.saturating_sub(3)])
    }
}
