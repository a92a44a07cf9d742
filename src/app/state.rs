//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin: the page in
//! whatever stage it has reached, the text currently in the search input, and
//! the scroll position of the notes list.
//!
//! # Page lifecycle
//!
//! ```text
//! Loading ──PageLoaded──► Wired(SearchFilter)     all three anchors present
//!                    └──► Static { .. }           any anchor missing
//! ```
//!
//! The first loaded page is kept for the rest of the session. A static page
//! still shows its notes, but nothing ever searches them.

use crate::domain::{NoteItem, Page, PageAnchors};
use crate::search::{Key, NoResultsBanner, SearchFilter, Trigger};
use crate::ui::helpers::{first_line, truncate};
use crate::ui::layout::{self, TITLE_COLUMN_WIDTH, UPDATED_COLUMN_WIDTH};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BannerInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel,
};

/// Where the page is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    /// No page has arrived from the worker yet.
    Loading,

    /// The page lacks at least one anchor; notes are shown but never filtered.
    Static { anchors: PageAnchors, notes: Vec<NoteItem> },

    /// Search is wired to the page.
    Wired(SearchFilter),
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Current value of the search input. Editing it never searches.
    pub query: String,

    pub page: PageState,

    /// Index of the first visible note shown in the list window.
    ///
    /// Never past the point where the last visible note sits on the last
    /// list row.
    pub scroll_offset: usize,

    /// Pane height at the last render; 0 until the first render.
    pub viewport_rows: usize,

    /// Sandbox path of the page snapshot, sent to the worker once permissions
    /// are granted.
    pub page_file: String,

    /// Last worker error, shown while no page is loaded.
    pub load_error: Option<String>,
}

impl AppState {
    #[must_use]
    pub fn new(page_file: impl Into<String>, theme: Theme) -> Self {
        Self {
            theme,
            query: String::new(),
            page: PageState::Loading,
            scroll_offset: 0,
            viewport_rows: 0,
            page_file: page_file.into(),
            load_error: None,
        }
    }

    /// Installs the loaded page, wiring search when the anchors allow it.
    ///
    /// Returns false, leaving state untouched, if a page was already loaded.
    pub fn load_page(&mut self, page: Page) -> bool {
        if !matches!(self.page, PageState::Loading) {
            tracing::debug!("page already initialized, ignoring reload");
            return false;
        }

        self.page = match SearchFilter::attach(page) {
            Ok(filter) => PageState::Wired(filter),
            Err(page) => PageState::Static {
                anchors: page.anchors,
                notes: page.notes,
            },
        };
        self.load_error = None;
        self.scroll_offset = 0;
        true
    }

    /// Feeds a trigger to the search filter using the current input value.
    ///
    /// Returns true if a search ran. Static and loading pages never search.
    pub fn fire(&mut self, trigger: Trigger) -> bool {
        let PageState::Wired(filter) = &mut self.page else {
            return false;
        };

        match filter.on_trigger(trigger, &self.query) {
            Some(mutations) => {
                tracing::debug!(mutation_count = mutations.len(), "search triggered");
                self.scroll_offset = 0;
                true
            }
            None => false,
        }
    }

    /// True when the page has a search input to type into.
    #[must_use]
    pub const fn accepts_input(&self) -> bool {
        match &self.page {
            PageState::Loading => false,
            PageState::Static { anchors, .. } => anchors.search_input.is_some(),
            PageState::Wired(_) => true,
        }
    }

    pub fn push_char(&mut self, c: char) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.query.push(c);
        self.fire(Trigger::KeyRelease(Key::Char(c)));
        true
    }

    pub fn pop_char(&mut self) -> bool {
        if !self.accepts_input() || self.query.pop().is_none() {
            return false;
        }
        self.fire(Trigger::KeyRelease(Key::Backspace));
        true
    }

    /// Records the pane height and pulls the scroll window back in range.
    pub fn set_viewport_rows(&mut self, rows: usize) {
        self.viewport_rows = rows;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
    }

    fn max_scroll_offset(&self) -> usize {
        let capacity = layout::list_capacity(self.viewport_rows, self.accepts_input());
        self.visible_notes().len().saturating_sub(capacity)
    }

    /// Moves the window down one note. Returns false once the last visible
    /// note is already on screen.
    pub fn scroll_down(&mut self) -> bool {
        if self.scroll_offset >= self.max_scroll_offset() {
            return false;
        }
        self.scroll_offset += 1;
        true
    }

    pub fn scroll_up(&mut self) -> bool {
        if self.scroll_offset == 0 {
            return false;
        }
        self.scroll_offset -= 1;
        true
    }

    /// Notes currently displayed, in page order.
    #[must_use]
    pub fn visible_notes(&self) -> Vec<&NoteItem> {
        match &self.page {
            PageState::Loading => vec![],
            PageState::Static { notes, .. } => notes.iter().filter(|n| n.is_visible()).collect(),
            PageState::Wired(filter) => filter.visible_items().collect(),
        }
    }

    #[must_use]
    pub fn total_notes(&self) -> usize {
        match &self.page {
            PageState::Loading => 0,
            PageState::Static { notes, .. } => notes.len(),
            PageState::Wired(filter) => filter.items().len(),
        }
    }

    #[must_use]
    pub const fn banner(&self) -> Option<&NoResultsBanner> {
        match &self.page {
            PageState::Wired(filter) => filter.banner(),
            _ => None,
        }
    }

    fn anchors(&self) -> Option<PageAnchors> {
        match &self.page {
            PageState::Loading => None,
            PageState::Static { anchors, .. } => Some(anchors.clone()),
            PageState::Wired(filter) => Some(PageAnchors::from(filter.anchors())),
        }
    }

    /// Label of the clickable search button, if search is wired.
    #[must_use]
    pub fn search_button_label(&self) -> Option<&str> {
        match &self.page {
            PageState::Wired(filter) => Some(filter.anchors().button.label.as_str()),
            _ => None,
        }
    }

    /// Returns true if the 1-indexed cell lies on the wired search button.
    #[must_use]
    pub fn hits_search_button(&self, row: usize, col: usize, cols: usize) -> bool {
        self.search_button_label()
            .is_some_and(|label| layout::hits_search_button(label, cols, row, col))
    }

    /// Computes a renderable view model for the current time.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        self.compute_viewmodel_at(rows, cols, chrono::Utc::now().timestamp())
    }

    /// Computes a renderable view model, formatting update times relative to `now`.
    #[must_use]
    pub fn compute_viewmodel_at(&self, rows: usize, cols: usize, now: i64) -> UIViewModel {
        let anchors = self.anchors();
        let search_bar = self.compute_search_bar(anchors.as_ref());
        let visible = self.visible_notes();

        let capacity = layout::list_capacity(rows, search_bar.is_some());
        let start = self
            .scroll_offset
            .min(visible.len().saturating_sub(capacity));

        let display_items = visible
            .iter()
            .skip(start)
            .take(capacity)
            .map(|note| Self::compute_display_item(note, cols, now))
            .collect();

        UIViewModel {
            display_items,
            header: self.compute_header(anchors.as_ref(), visible.len()),
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(),
            search_bar,
            banner: self.banner().map(|banner| BannerInfo {
                message: banner.message().to_string(),
                style: banner.style(),
            }),
        }
    }

    fn compute_display_item(note: &NoteItem, cols: usize, now: i64) -> DisplayItem {
        let snippet_width = cols.saturating_sub(TITLE_COLUMN_WIDTH + UPDATED_COLUMN_WIDTH + 2);

        DisplayItem {
            title: truncate(&note.title, TITLE_COLUMN_WIDTH - 2),
            snippet: truncate(first_line(&note.content), snippet_width),
            updated: note.updated_ago(now),
        }
    }

    fn compute_header(&self, anchors: Option<&PageAnchors>, visible: usize) -> HeaderInfo {
        let heading = anchors
            .and_then(|a| a.notes_container.as_ref())
            .map_or("Notes", |container| container.heading.as_str());

        let title = match (&self.page, &self.load_error) {
            (PageState::Loading, Some(_)) => format!(" {heading} (error) "),
            (PageState::Loading, None) => format!(" {heading} (loading) "),
            _ => format!(" {heading} ({visible}/{}) ", self.total_notes()),
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match &self.page {
            PageState::Wired(_) => "Type to edit  Enter/click: search  ↑/↓ or Ctrl+n/p: scroll  Esc: close",
            PageState::Static { .. } => "↑/↓ or Ctrl+n/p: scroll  Esc: close  (search unavailable)",
            PageState::Loading => "Esc: close",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_bar(&self, anchors: Option<&PageAnchors>) -> Option<SearchBarInfo> {
        let input = anchors?.search_input.as_ref()?;
        Some(SearchBarInfo {
            query: self.query.clone(),
            placeholder: input.placeholder.clone(),
            button: self.search_button_label().map(ToString::to_string),
        })
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !matches!(self.page, PageState::Loading) {
            return None;
        }
        Some(match &self.load_error {
            Some(error) => EmptyState {
                message: "Could not load notes".to_string(),
                subtitle: error.clone(),
            },
            None => EmptyState {
                message: "Loading notes...".to_string(),
                subtitle: self.page_file.clone(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SearchButton;

    fn notes() -> Vec<NoteItem> {
        vec![
            NoteItem::new(1, "Meeting Notes", "discuss budget\nand more", 1_000),
            NoteItem::new(2, "Recipe", "pasta dish", 1_000),
        ]
    }

    fn wired_state() -> AppState {
        let mut state = AppState::new("/host/page.json", Theme::default());
        state.load_page(Page {
            anchors: PageAnchors::complete(),
            notes: notes(),
        });
        state
    }

    #[test]
    fn complete_page_is_wired() {
        let state = wired_state();
        assert!(matches!(state.page, PageState::Wired(_)));
        assert_eq!(state.search_button_label(), Some("Search"));
    }

    #[test]
    fn page_without_button_stays_static() {
        let mut state = AppState::new("/host/page.json", Theme::default());
        let anchors = PageAnchors {
            search_button: None,
            ..PageAnchors::complete()
        };
        state.load_page(Page { anchors, notes: notes() });

        assert!(matches!(state.page, PageState::Static { .. }));
        assert!(state.accepts_input());

        state.query = "budget".to_string();
        assert!(!state.fire(Trigger::Activate));
        assert_eq!(state.visible_notes().len(), 2);
        assert!(!state.hits_search_button(5, 70, 80));
    }

    #[test]
    fn second_page_is_ignored() {
        let mut state = wired_state();
        let reloaded = state.load_page(Page {
            anchors: PageAnchors::complete(),
            notes: vec![],
        });

        assert!(!reloaded);
        assert_eq!(state.total_notes(), 2);
    }

    #[test]
    fn viewmodel_lists_only_visible_notes() {
        let mut state = wired_state();
        state.query = "budget".to_string();
        state.fire(Trigger::Activate);

        let vm = state.compute_viewmodel_at(24, 80, 1_000 + 2 * 3600);

        assert_eq!(vm.header.title, " Notes (1/2) ");
        assert_eq!(vm.display_items.len(), 1);
        assert_eq!(vm.display_items[0].title, "Meeting Notes");
        assert_eq!(vm.display_items[0].snippet, "discuss budget");
        assert_eq!(vm.display_items[0].updated, "2h ago");
        assert!(vm.banner.is_none());
    }

    #[test]
    fn viewmodel_carries_the_banner() {
        let mut state = wired_state();
        state.query = "xyz".to_string();
        state.fire(Trigger::KeyRelease(Key::Confirm));

        let vm = state.compute_viewmodel_at(24, 80, 1_000);

        assert!(vm.display_items.is_empty());
        assert_eq!(
            vm.banner.map(|b| b.message),
            Some("No notes found matching \"xyz\"".to_string())
        );
    }

    #[test]
    fn search_bar_shows_custom_button_label() {
        let mut state = AppState::new("/host/page.json", Theme::default());
        let anchors = PageAnchors {
            search_button: Some(SearchButton {
                label: "Go".to_string(),
            }),
            ..PageAnchors::complete()
        };
        state.load_page(Page { anchors, notes: vec![] });

        let bar = state.compute_viewmodel_at(24, 80, 0).search_bar.unwrap();
        assert_eq!(bar.button.as_deref(), Some("Go"));
        assert_eq!(bar.placeholder, "Search notes...");
    }

    #[test]
    fn scrolling_up_from_the_bottom_moves_at_once() {
        let mut state = thirty_notes_on(24);
        while state.scroll_down() {}

        assert!(state.scroll_up());
        assert_eq!(first_title(&state), "Note 15");
    }

    #[test]
    fn taller_pane_pulls_the_window_back() {
        let mut state = thirty_notes_on(24);
        while state.scroll_down() {}

        state.set_viewport_rows(44);

        assert_eq!(state.scroll_offset, 0);
        assert!(!state.scroll_down());
        assert_eq!(first_title(&state), "Note 0");
    }

    #[test]
    fn loading_state_shows_status() {
        let mut state = AppState::new("/host/page.json", Theme::default());
        let vm = state.compute_viewmodel_at(24, 80, 0);
        assert_eq!(vm.header.title, " Notes (loading) ");
        assert!(vm.search_bar.is_none());
        assert_eq!(vm.empty_state.unwrap().message, "Loading notes...");

        state.load_error = Some("load page: IO error: not found".to_string());
        let vm = state.compute_viewmodel_at(24, 80, 0);
        assert_eq!(vm.header.title, " Notes (error) ");
        assert_eq!(vm.empty_state.unwrap().subtitle, "load page: IO error: not found");
    }

    fn thirty_notes_on(rows: usize) -> AppState {
        let mut state = AppState::new("/host/page.json", Theme::default());
        let many = (0..30).map(|i| NoteItem::new(i, format!("Note {i}"), "", 0)).collect();
        state.load_page(Page {
            anchors: PageAnchors::complete(),
            notes: many,
        });
        state.set_viewport_rows(rows);
        state
    }

    fn first_title(state: &AppState) -> String {
        let vm = state.compute_viewmodel_at(state.viewport_rows, 80, 0);
        vm.display_items[0].title.clone()
    }

    #[test]
    fn scroll_window_stays_within_visible_notes() {
        let mut state = thirty_notes_on(24);

        let moved = (0..100).filter(|_| state.scroll_down()).count();
        assert_eq!(moved, 16);
        assert_eq!(state.scroll_offset, 16);
        assert!(!state.scroll_down());

        let vm = state.compute_viewmodel_at(24, 80, 0);
        assert_eq!(vm.display_items.len(), 14);
        assert_eq!(vm.display_items[0].title, "Note 16");
        assert_eq!(vm.display_items[13].title, "Note 29");

        state.query = "note 1".to_string();
        state.fire(Trigger::Activate);
        assert_eq!(state.scroll_offset, 0);
    }
}
