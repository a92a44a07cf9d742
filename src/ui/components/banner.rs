//! No-results banner renderer.

use crate::search::BannerStyle;
use crate::ui::helpers::{position_cursor, truncate, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BannerInfo;

/// Renders the banner on the row right after the last note.
///
/// Always clears the row, so a removed banner leaves no residue.
pub fn render_banner(row: usize, banner: Option<&BannerInfo>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let Some(banner) = banner else {
        print!("{}", " ".repeat(cols));
        return row + 1;
    };

    match banner.style {
        BannerStyle::Info => {
            print!("{}", Theme::italic());
            print!("{}", Theme::fg(&theme.colors.banner_fg));
            if let Some(bg) = &theme.colors.banner_bg {
                print!("{}", Theme::bg(bg));
            }
        }
    }

    let message = truncate(&format!("  {}", banner.message), cols);
    print!("{message}");
    print!("{}", " ".repeat(cols.saturating_sub(visual_len(&message))));
    print!("{}", Theme::reset());
    row + 1
}
