//! Search box and button renderer.

use crate::ui::helpers::{position_cursor, truncate, visual_len};
use crate::ui::layout::{self, SEARCH_BAR_HEIGHT, SEARCH_BOX_MARGIN};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Renders the 3-line search box and, when present, the button beside it.
///
/// ```text
/// [margin] ┌──────────────────────┐ ┌────────┐ [margin]
/// [margin] │ > budget             │ │ Search │ [margin]
/// [margin] └──────────────────────┘ └────────┘ [margin]
/// ```
///
/// An empty input shows the placeholder dimmed. The button geometry comes from
/// [`layout::button_span`] so clicks and drawing always agree.
///
/// Returns the row after the box.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = layout::input_box_width(search.button.as_deref(), cols);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    for offset in 0..SEARCH_BAR_HEIGHT {
        position_cursor(row + offset, 1);
        print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
        print!("{border}");
        match offset {
            0 => print!("┌{}┐", "─".repeat(inner_width)),
            1 => {
                print!("│");
                render_input_text(search, theme, inner_width);
                print!("{border}│");
            }
            _ => print!("└{}┘", "─".repeat(inner_width)),
        }
        print!("{}", Theme::reset());
    }

    if let Some(label) = &search.button {
        render_button(row, label, theme, cols);
    }

    row + SEARCH_BAR_HEIGHT
}

fn render_input_text(search: &SearchBarInfo, theme: &Theme, inner_width: usize) {
    let (text, style) = if search.query.is_empty() {
        (
            format!(" > {}", search.placeholder),
            format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim)),
        )
    } else {
        (format!(" > {}", search.query), Theme::fg(&theme.colors.text_normal))
    };

    let text = truncate(&text, inner_width);
    print!("{style}{text}{}", Theme::reset());
    print!("{}", " ".repeat(inner_width.saturating_sub(visual_len(&text))));
}

fn render_button(row: usize, label: &str, theme: &Theme, cols: usize) {
    let Some(span) = layout::button_span(label, cols) else {
        return;
    };
    let inner_width = layout::button_width(label) - 2;
    let border = Theme::fg(&theme.colors.search_bar_border);

    position_cursor(row, span.first_col);
    print!("{border}┌{}┐{}", "─".repeat(inner_width), Theme::reset());

    position_cursor(row + 1, span.first_col);
    print!("{border}│{}", Theme::reset());
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.button_fg));
    print!("{}", Theme::bg(&theme.colors.button_bg));
    print!(" {label} ");
    print!("{}", Theme::reset());
    print!("{border}│{}", Theme::reset());

    position_cursor(row + 2, span.first_col);
    print!("{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());
}
