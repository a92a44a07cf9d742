//! Status message shown in place of the notes list.
//!
//! Used while the page snapshot is still loading and when it failed to load.

use crate::ui::helpers::{position_cursor, truncate, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// First row of the two-line status block.
const STATUS_ROW: usize = 6;

/// Renders the centered status block.
///
/// ```text
/// [blank rows]
///            Could not load notes
///      load page: IO error: No such file
/// ```
///
/// The subtitle usually carries a path or error text, so it is truncated
/// rather than allowed to wrap.
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, cols: usize) {
    print_centered(STATUS_ROW, &empty.message, &Theme::fg(&theme.colors.empty_state_fg), cols);

    let subtitle_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    print_centered(STATUS_ROW + 1, &truncate(&empty.subtitle, cols), &subtitle_style, cols);
}

fn print_centered(row: usize, text: &str, style: &str, cols: usize) {
    let len = visual_len(text);
    let padding = (cols.saturating_sub(len)) / 2;

    position_cursor(row, 1);
    print!("{style}");
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}
