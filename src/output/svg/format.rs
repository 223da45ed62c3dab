//! SVG text formatting helpers.

/// Escape text for SVG content and attribute values.
#[must_use]
pub fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// `"1 paper"`, `"3 papers"`.
#[must_use]
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Truncate to `max_chars` characters, cutting to `max_chars - 2` plus an ellipsis.
#[must_use]
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let kept: String = label.chars().take(max_chars.saturating_sub(2)).collect();
    format!("{kept}\u{2026}")
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
