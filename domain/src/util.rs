//! Shared utility functions.

/// Single-line preview of user text for log messages.
///
/// Collapses runs of whitespace and cuts at `max_chars` characters, appending
/// `...` when something was dropped.
pub fn preview(s: &str, max_chars: usize) -> String {
    let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let cut: String = collapsed.chars().take(max_chars).collect();
    format!("{}...", cut)
}
