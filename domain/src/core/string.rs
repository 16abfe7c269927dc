//! String utilities for the domain layer.

/// Single-line preview of free text for log messages.
///
/// Newlines are flattened to spaces and the result is cut to `max_chars`
/// characters (not bytes), with `...` appended when anything was dropped.
pub fn preview(s: &str, max_chars: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut cut: String = flat.chars().take(max_chars.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}
