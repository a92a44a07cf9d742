//! Screen geometry shared by the renderer and mouse hit-testing.
//!
//! All rows and columns here are 1-indexed terminal cells, matching the
//! cursor positioning escape sequences the components emit.
//!
//! ```text
//! row 1   [blank]
//! row 2   [Header]
//! row 3   [Border]
//! row 4-6 [Search box................][ Search ]   (input anchor only)
//!         [Column headings]
//!         [Note rows...]
//!         [No-results banner]
//!         [Border]
//!         [Footer]
//! ```

/// Row of the title bar.
pub const HEADER_ROW: usize = 2;

/// First row of the 3-line search box.
pub const SEARCH_BAR_ROW: usize = 4;

/// Height of the search box including its frame.
pub const SEARCH_BAR_HEIGHT: usize = 3;

/// Blank columns left of the search box and right of the button.
pub const SEARCH_BOX_MARGIN: usize = 5;

/// Width of the notes list TITLE column, including its gap.
pub const TITLE_COLUMN_WIDTH: usize = 30;

/// Width of the right-aligned UPDATED column.
pub const UPDATED_COLUMN_WIDTH: usize = 10;

/// Narrowest input box that still leaves room for the button.
const MIN_INPUT_WIDTH: usize = 12;

/// Rows taken by everything except the note rows, without a search box:
/// blank, header, border, column headings, banner, border, footer.
const BASE_CHROME_ROWS: usize = 7;

/// Row of the TITLE/CONTENT/UPDATED headings, below the search box if any.
#[must_use]
pub const fn list_headings_row(has_search_bar: bool) -> usize {
    if has_search_bar {
        SEARCH_BAR_ROW + SEARCH_BAR_HEIGHT
    } else {
        SEARCH_BAR_ROW
    }
}

/// Row of the no-results banner: directly after the last rendered note.
#[must_use]
pub const fn banner_row(has_search_bar: bool, item_count: usize) -> usize {
    list_headings_row(has_search_bar) + 1 + item_count
}

/// Number of note rows that fit on screen.
///
/// One row below the list is always reserved for the no-results banner so
/// that inserting it never pushes the footer off screen.
#[must_use]
pub const fn list_capacity(rows: usize, has_search_bar: bool) -> usize {
    let chrome = if has_search_bar {
        BASE_CHROME_ROWS + SEARCH_BAR_HEIGHT
    } else {
        BASE_CHROME_ROWS
    };
    rows.saturating_sub(chrome)
}

/// Width of the framed button: `│ label │`.
#[must_use]
pub fn button_width(label: &str) -> usize {
    label.chars().count() + 4
}

/// Horizontal extent of the search button, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSpan {
    pub first_col: usize,
    pub last_col: usize,
}

/// Places the button at the right edge of the search row.
///
/// Returns `None` when the terminal is too narrow to draw both the input box
/// and the button; the button is then neither drawn nor clickable.
///
/// # Examples
///
/// ```
/// use notesift::ui::layout::{button_span, ButtonSpan};
///
/// // "│ Search │" is 10 cells wide, ending 5 cells before the right edge.
/// assert_eq!(button_span("Search", 80), Some(ButtonSpan { first_col: 66, last_col: 75 }));
/// assert_eq!(button_span("Search", 20), None);
/// ```
#[must_use]
pub fn button_span(label: &str, cols: usize) -> Option<ButtonSpan> {
    let width = button_width(label);
    if cols < SEARCH_BOX_MARGIN * 2 + MIN_INPUT_WIDTH + 1 + width {
        return None;
    }
    let last_col = cols - SEARCH_BOX_MARGIN;
    Some(ButtonSpan {
        first_col: last_col + 1 - width,
        last_col,
    })
}

/// Width of the input box frame, leaving one blank column before the button.
#[must_use]
pub fn input_box_width(button_label: Option<&str>, cols: usize) -> usize {
    let full = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    match button_label.and_then(|label| button_span(label, cols)) {
        Some(span) => span.first_col - 1 - SEARCH_BOX_MARGIN - 1,
        None => full,
    }
}

/// Returns true if the 1-indexed cell (`row`, `col`) lies on the button.
#[must_use]
pub fn hits_search_button(label: &str, cols: usize, row: usize, col: usize) -> bool {
    let rows = SEARCH_BAR_ROW..SEARCH_BAR_ROW + SEARCH_BAR_HEIGHT;
    rows.contains(&row)
        && button_span(label, cols).is_some_and(|span| (span.first_col..=span.last_col).contains(&col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_is_clickable_on_all_three_rows() {
        for row in 4..=6 {
            assert!(hits_search_button("Search", 80, row, 66));
            assert!(hits_search_button("Search", 80, row, 75));
        }
    }

    #[test]
    fn clicks_beside_the_button_miss() {
        assert!(!hits_search_button("Search", 80, 3, 70));
        assert!(!hits_search_button("Search", 80, 7, 70));
        assert!(!hits_search_button("Search", 80, 5, 65));
        assert!(!hits_search_button("Search", 80, 5, 76));
    }

    #[test]
    fn input_box_stops_before_the_button() {
        let width = input_box_width(Some("Search"), 80);
        // Input occupies columns 6..=64, one blank column at 65, button from 66.
        assert_eq!(SEARCH_BOX_MARGIN + width, 64);
        assert_eq!(input_box_width(None, 80), 70);
    }

    #[test]
    fn banner_follows_the_last_note_row() {
        assert_eq!(list_headings_row(true), 7);
        assert_eq!(banner_row(true, 0), 8);
        assert_eq!(banner_row(true, 3), 11);
        assert_eq!(banner_row(false, 3), 8);
    }

    #[test]
    fn full_list_leaves_banner_above_the_bottom_chrome() {
        for (rows, has_search_bar) in [(24, true), (24, false), (40, true)] {
            let capacity = list_capacity(rows, has_search_bar);
            // Border and footer take the last two rows.
            assert_eq!(banner_row(has_search_bar, capacity), rows - 2);
        }
    }

    #[test]
    fn capacity_accounts_for_search_box_and_banner() {
        assert_eq!(list_capacity(24, true), 14);
        assert_eq!(list_capacity(24, false), 17);
        assert_eq!(list_capacity(5, true), 0);
    }
}
