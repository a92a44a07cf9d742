//! Notesift: a Zellij plugin that filters a notes page as you search.
//!
//! The notes application exports its rendered index page as a JSON snapshot:
//! a search input, a search button, a notes container, and the notes. The
//! plugin shows that page in a pane and wires the search behavior to it.
//! Pressing Enter or clicking the button hides every note whose title and
//! content do not contain the typed text (case-insensitive), and shows a
//! "No notes found" banner after the list when nothing matches.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Events, actions,
//! │                                                     │    page lifecycle
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Search        │   │ UI (ui/)      │   │ Worker        │
//! │ (search/)     │   │ - View model  │   │ (worker/)     │
//! │ - SearchFilter│   │               │   │               │
//! │ - plan()      │   │ - Layout      │   │ - Page load   │
//! │ - Banner      │   │ - Components  │   │ - IPC bridge  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/)  ·  Storage (storage/)            │
//! │  NoteItem, Page, errors · JSON snapshot, ordering   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure (paths) · Observability (OTel file) │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/notesift.wasm" {
//!         page_file "~/.local/share/zellij/notesift/page.json"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Load**: parse configuration, initialize tracing, create `AppState`,
//!    request permissions, subscribe to events.
//! 2. **Permissions granted**: post `LoadPage` to the worker.
//! 3. **Worker**: read the snapshot, drop untitled notes, order by last
//!    update, reply with `PageLoaded`.
//! 4. **Page loaded**: wire the search filter if all three anchors exist,
//!    otherwise keep the page static. Later loads are ignored.
//!
//! # Example
//!
//! ```rust
//! use notesift::domain::{NoteItem, Page, PageAnchors};
//! use notesift::search::Key;
//! use notesift::worker::WorkerResponse;
//! use notesift::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let page = Page {
//!     anchors: PageAnchors::complete(),
//!     notes: vec![
//!         NoteItem::new(1, "Meeting Notes", "discuss budget", 0),
//!         NoteItem::new(2, "Recipe", "pasta dish", 0),
//!     ],
//! };
//! handle_event(&mut state, &Event::WorkerResponse(WorkerResponse::PageLoaded { page }))?;
//!
//! for c in "budget".chars() {
//!     handle_event(&mut state, &Event::Key(Key::Char(c)))?;
//! }
//! handle_event(&mut state, &Event::Key(Key::Confirm))?;
//!
//! assert_eq!(state.visible_notes().len(), 1);
//! # Ok::<(), notesift::NotesiftError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod search;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, PageState};
pub use domain::{NotesiftError, Result};
pub use search::SearchFilter;
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Sandbox path of the page snapshot, tilde already expanded.
    pub page_file: String,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for spans and events. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_file: infrastructure::default_page_file().to_string_lossy().into_owned(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values count as unset. `page_file` and `theme_file` get `~`
    /// expanded to the sandbox `/host` mount.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use notesift::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_file".to_string(), "~/notes/page.json".to_string());
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.page_file, "/host/notes/page.json");
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
        };

        Self {
            page_file: get("page_file")
                .map_or_else(|| Self::default().page_file, infrastructure::expand_tilde),
            theme_name: get("theme").map(String::from),
            theme_file: get("theme_file").map(infrastructure::expand_tilde),
            trace_level: get("trace_level").map(String::from),
        }
    }

    /// Resolves the configured theme: file first, then name, then the default.
    ///
    /// # Errors
    ///
    /// Returns [`NotesiftError::Theme`] if the theme file cannot be loaded and
    /// [`NotesiftError::Config`] if the theme name is unknown.
    pub fn theme(&self) -> Result<Theme> {
        if let Some(path) = &self.theme_file {
            return Theme::from_file(path);
        }
        match &self.theme_name {
            Some(name) => Theme::from_name(name)
                .ok_or_else(|| NotesiftError::Config(format!("unknown theme: {name}"))),
            None => Ok(Theme::default()),
        }
    }
}

/// Creates the initial `AppState` for `config`.
///
/// A theme that fails to load is logged and replaced by the default; the
/// plugin never refuses to start over cosmetics.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(page_file = %config.page_file, "initializing notesift plugin");

    let theme = config.theme().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load theme, using default");
        Theme::default()
    });

    AppState::new(config.page_file.clone(), theme)
}
