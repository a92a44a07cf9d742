//! JSON file page source.
//!
//! Reads the page snapshot exported by the notes application. The file is
//! read-only from the plugin's point of view; it is reopened on every load.
//!
//! # File Format
//!
//! ```json
//! {
//!   "searchInput": { "placeholder": "Search notes..." },
//!   "searchBtn": { "label": "Search" },
//!   "notesContainer": { "heading": "My Notes" },
//!   "notes": [
//!     {
//!       "id": 1,
//!       "title": "Meeting Notes",
//!       "content": "discuss budget",
//!       "created_at": 1700000000,
//!       "updated_at": 1700003600
//!     }
//!   ]
//! }
//! ```
//!
//! Timestamps may also be ISO-8601 strings such as `"2024-05-01T10:00:00"`.

use crate::domain::error::{NotesiftError, Result};
use crate::storage::backend::PageSource;
use crate::storage::models::PageSnapshot;
use std::path::{Path, PathBuf};

/// Page source backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonPageSource {
    file_path: PathBuf,
}

impl JsonPageSource {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl PageSource for JsonPageSource {
    fn load_page(&self) -> Result<PageSnapshot> {
        let _span = tracing::debug_span!("json_load_page", path = ?self.file_path).entered();

        let contents = std::fs::read_to_string(&self.file_path)?;
        let snapshot: PageSnapshot = serde_json::from_str(&contents)
            .map_err(|e| NotesiftError::Page(format!("failed to parse page snapshot: {e}")))?;

        tracing::debug!(
            note_count = snapshot.notes.len(),
            has_input = snapshot.anchors.search_input.is_some(),
            has_button = snapshot.anchors.search_button.is_some(),
            has_container = snapshot.anchors.notes_container.is_some(),
            "page snapshot loaded"
        );

        Ok(snapshot)
    }
}
