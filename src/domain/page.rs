//! Page model supplied by the notes application.
//!
//! The notes application renders a page once and hands it over as a snapshot:
//! up to three anchor elements (search input, search button, notes container)
//! and the note items. The search feature is wired only when all three
//! anchors are present.

use super::note::NoteItem;
use serde::{Deserialize, Serialize};

/// Text input the search term is read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchInput {
    #[serde(default = "SearchInput::default_placeholder")]
    pub placeholder: String,
}

impl SearchInput {
    fn default_placeholder() -> String {
        "Search notes...".to_string()
    }
}

impl Default for SearchInput {
    fn default() -> Self {
        Self {
            placeholder: Self::default_placeholder(),
        }
    }
}

/// Button whose activation runs a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchButton {
    #[serde(default = "SearchButton::default_label")]
    pub label: String,
}

impl SearchButton {
    fn default_label() -> String {
        "Search".to_string()
    }
}

impl Default for SearchButton {
    fn default() -> Self {
        Self {
            label: Self::default_label(),
        }
    }
}

/// Container holding the note items; the no-results banner goes right after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesContainer {
    #[serde(default = "NotesContainer::default_heading")]
    pub heading: String,
}

impl NotesContainer {
    fn default_heading() -> String {
        "Notes".to_string()
    }
}

impl Default for NotesContainer {
    fn default() -> Self {
        Self {
            heading: Self::default_heading(),
        }
    }
}

/// Anchor elements as rendered on the page, each possibly absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageAnchors {
    #[serde(rename = "searchInput", default)]
    pub search_input: Option<SearchInput>,
    #[serde(rename = "searchBtn", default)]
    pub search_button: Option<SearchButton>,
    #[serde(rename = "notesContainer", default)]
    pub notes_container: Option<NotesContainer>,
}

impl PageAnchors {
    /// Anchors with all three elements present.
    #[must_use]
    pub fn complete() -> Self {
        Self {
            search_input: Some(SearchInput::default()),
            search_button: Some(SearchButton::default()),
            notes_container: Some(NotesContainer::default()),
        }
    }

    /// Resolves the three anchors, or `None` if any of them is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use notesift::domain::PageAnchors;
    ///
    /// assert!(PageAnchors::complete().resolve().is_some());
    ///
    /// let mut anchors = PageAnchors::complete();
    /// anchors.search_button = None;
    /// assert!(anchors.resolve().is_none());
    /// ```
    #[must_use]
    pub fn resolve(&self) -> Option<Anchors> {
        Some(Anchors {
            input: self.search_input.clone()?,
            button: self.search_button.clone()?,
            container: self.notes_container.clone()?,
        })
    }
}

/// The three anchors, all present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchors {
    pub input: SearchInput,
    pub button: SearchButton,
    pub container: NotesContainer,
}

impl From<&Anchors> for PageAnchors {
    fn from(anchors: &Anchors) -> Self {
        Self {
            search_input: Some(anchors.input.clone()),
            search_button: Some(anchors.button.clone()),
            notes_container: Some(anchors.container.clone()),
        }
    }
}

/// A loaded page: anchors plus the note items in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub anchors: PageAnchors,
    pub notes: Vec<NoteItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_deserialize_from_element_ids() {
        let json = r#"{
            "searchInput": { "placeholder": "Find..." },
            "searchBtn": {},
            "notesContainer": { "heading": "My Notes" }
        }"#;

        let anchors: PageAnchors = serde_json::from_str(json).unwrap();
        let resolved = anchors.resolve().unwrap();

        assert_eq!(resolved.input.placeholder, "Find...");
        assert_eq!(resolved.button.label, "Search");
        assert_eq!(resolved.container.heading, "My Notes");
    }

    #[test]
    fn any_missing_anchor_prevents_resolution() {
        for strip in 0..3 {
            let mut anchors = PageAnchors::complete();
            match strip {
                0 => anchors.search_input = None,
                1 => anchors.search_button = None,
                _ => anchors.notes_container = None,
            }
            assert!(anchors.resolve().is_none(), "anchor {strip} missing");
        }
    }

    #[test]
    fn resolved_anchors_convert_back() {
        let anchors = PageAnchors::complete().resolve().unwrap();
        assert_eq!(PageAnchors::from(&anchors), PageAnchors::complete());
    }
}
