//! Text shaping helpers for fact cards.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Cap `text` at `max_chars` characters. Longer input is cut, trimmed, and
/// suffixed with an ellipsis; input within budget is returned unchanged.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let prefix: String = text.chars().take(max_chars).collect();
    format!("{}...", prefix.trim())
}
