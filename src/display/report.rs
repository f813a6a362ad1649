//! Report formatting utilities for terminal output
//!
//! Small helpers shared by the trend and account views.

/// Create a simple bar chart representation.
///
/// Negative values draw in the opposite glyph so a chart of net totals shows
/// which months went below zero.
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value == 0.0 {
        return " ".repeat(width);
    }

    let glyph = if value < 0.0 { "▒" } else { "█" };
    let filled = ((value.abs() / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", glyph.repeat(filled), " ".repeat(width - filled))
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = width.saturating_sub(len) / 2;
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Shorten `s` to at most `max` characters, marking the cut with `…`
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(50.0, 100.0, 10), "█████     ");
        assert_eq!(format_bar(-100.0, 100.0, 4), "▒▒▒▒");
        assert_eq!(format_bar(0.0, 100.0, 3), "   ");
        assert_eq!(format_bar(10.0, 0.0, 3), "   ");
    }

    #[test]
    fn test_format_header() {
        assert_eq!(format_header("Hi", 6), "  Hi");
        assert_eq!(format_header("Too long", 4), "Too long");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Checking", 20), "Checking");
        assert_eq!(truncate("Very Long Account Name", 8), "Very Lo…");
    }
}
