//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar with counts
//! - [`search`]: Search input box and button
//! - [`notes`]: Notes list (TITLE, CONTENT, UPDATED)
//! - [`banner`]: No-results banner after the list
//! - [`footer`]: Keybinding hints
//! - [`empty`]: Loading and load-error status

mod banner;
mod empty;
mod footer;
mod header;
mod notes;
mod search;

pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use banner::render_banner;
use footer::render_footer;
use header::render_header;
use notes::{render_list_headings, render_note_rows};
use search::render_search_bar;

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the header and its separator; shared by every layout.
fn render_top(vm: &UIViewModel, theme: &Theme, cols: usize) -> usize {
    let row = render_header(layout::HEADER_ROW, &vm.header, theme, cols);
    render_border(row, &theme.colors.border, cols)
}

/// Renders the bottom separator and footer on the last two rows.
fn render_bottom(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.saturating_sub(1);
    render_border(footer_row.saturating_sub(1), &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}

/// Renders a loaded page.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines, if the page has an input]
/// [Column headings]
/// [Note rows]
/// [Banner row]
/// [Blank padding]
/// [Border]
/// [Footer]
/// ```
pub fn render_page(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let current_row = render_top(vm, theme, cols);

    let has_search_bar = vm.search_bar.is_some();
    if let Some(search) = &vm.search_bar {
        render_search_bar(current_row, search, theme, cols);
    }
    let first_note_row = render_list_headings(layout::list_headings_row(has_search_bar), theme, cols);
    render_note_rows(first_note_row, &vm.display_items, theme, cols);
    render_banner(
        layout::banner_row(has_search_bar, vm.display_items.len()),
        vm.banner.as_ref(),
        theme,
        cols,
    );

    render_bottom(vm, theme, cols, rows);
}

/// Renders the status screen shown before a page is available.
pub fn render_status(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    render_top(vm, theme, cols);
    if let Some(empty) = &vm.empty_state {
        render_empty_state(empty, theme, cols);
    }
    render_bottom(vm, theme, cols, rows);
}
