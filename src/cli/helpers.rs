//! Shared helper functions for CLI commands
//!
//! Small string utilities used by the table, card and detail renderers.

/// Truncate a string to `max_len` characters, adding "..." if truncated
///
/// Counts characters rather than bytes so multi-byte player names never
/// split mid-codepoint.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Escape a string for CSV output
///
/// Handles commas, quotes, and newlines according to RFC 4180.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Horizontal bar of `width` cells, `ratio` of them filled
pub fn bar(ratio: f64, width: usize) -> String {
    let filled = (ratio.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// "made/attempted" with absent values shown as 0
pub fn ratio_str(made: Option<u32>, attempted: Option<u32>) -> String {
    format!("{}/{}", made.unwrap_or(0), attempted.unwrap_or(0))
}
