//! Small text helpers shared by the assembler, summarizer and table output.

/// Truncate to at most `max_chars` characters, respecting UTF-8 boundaries.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
