//! Notes list renderer.
//!
//! Three columns: TITLE (fixed width), CONTENT (first line, remaining width)
//! and UPDATED (right-aligned relative time).

use crate::ui::helpers::{position_cursor, visual_len};
use crate::ui::layout::{TITLE_COLUMN_WIDTH, UPDATED_COLUMN_WIDTH};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Renders the bold column headings at `row` and returns the next row.
pub fn render_list_headings(row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    let content_width = cols.saturating_sub(TITLE_COLUMN_WIDTH + UPDATED_COLUMN_WIDTH);
    print!(
        "{:<title$}{:<content$}{:>updated$}",
        "TITLE",
        "CONTENT",
        "UPDATED",
        title = TITLE_COLUMN_WIDTH,
        content = content_width,
        updated = UPDATED_COLUMN_WIDTH
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders every item starting at `row` and returns the row after the last one.
pub fn render_note_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    items
        .iter()
        .fold(row, |current, item| render_note_row(current, item, theme, cols))
}

fn render_note_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    print!("{}", Theme::fg(&theme.colors.title_fg));
    print!("{}", item.title);
    print!("{}", " ".repeat(TITLE_COLUMN_WIDTH.saturating_sub(visual_len(&item.title))));

    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", item.snippet);

    let used = TITLE_COLUMN_WIDTH + visual_len(&item.snippet);
    let updated_len = visual_len(&item.updated);
    print!("{}", " ".repeat(cols.saturating_sub(used + updated_len)));

    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", item.updated);
    print!("{}", Theme::reset());
    row + 1
}
