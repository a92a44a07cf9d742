//! View model types representing renderable UI state.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data:
//! hidden notes are already filtered out, text is already truncated.

use crate::search::BannerStyle;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Visible notes inside the current scroll window.
    pub display_items: Vec<DisplayItem>,

    /// Header information (title and counts).
    pub header: HeaderInfo,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,

    /// Shown instead of the list while the page is loading or failed to load.
    pub empty_state: Option<EmptyState>,

    /// Present when the page has a search input.
    pub search_bar: Option<SearchBarInfo>,

    /// The no-results banner placed right after the list.
    pub banner: Option<BannerInfo>,
}

/// One rendered note row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Title, truncated to the title column.
    pub title: String,

    /// First line of the content, truncated to the remaining width.
    pub snippet: String,

    /// Relative update time such as `3h ago`.
    pub updated: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Centered status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "Loading notes...").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search input box and optional button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current input value, exactly as typed.
    pub query: String,

    /// Shown dimmed while the input is empty.
    pub placeholder: String,

    /// Button label, `None` when the page has no search button.
    pub button: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerInfo {
    pub message: String,
    pub style: BannerStyle,
}
