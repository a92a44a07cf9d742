//! Shared rendering utilities.

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Truncates `text` to at most `max` characters, ending in `...` when cut.
///
/// Counts characters rather than bytes so multi-byte titles are never split.
///
/// # Examples
///
/// ```
/// use notesift::ui::helpers::truncate;
///
/// assert_eq!(truncate("Meeting Notes", 20), "Meeting Notes");
/// assert_eq!(truncate("Meeting Notes", 10), "Meeting...");
/// assert_eq!(truncate("Meeting Notes", 2), "Me");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let mut cut: String = text.chars().take(max - 3).collect();
    cut.push_str("...");
    cut
}

/// Display width of `text` in terminal cells, one cell per character.
#[must_use]
pub fn visual_len(text: &str) -> usize {
    text.chars().count()
}

/// First line of `content`, or an empty string.
#[must_use]
pub fn first_line(content: &str) -> &str {
    content.lines().next().unwrap_or("").trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("café au lait", 7), "café...");
        assert_eq!(visual_len("café"), 4);
    }

    #[test]
    fn first_line_stops_at_newline() {
        assert_eq!(first_line("discuss budget\nand timeline"), "discuss budget");
        assert_eq!(first_line(""), "");
    }
}
