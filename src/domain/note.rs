//! Note item domain model.
//!
//! A [`NoteItem`] is one rendered note on the page. It carries two lowercase
//! search keys, the original title/content text shown to the user, and a
//! visibility flag that only the search filter mutates.

use serde::{Deserialize, Serialize};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3600;
const SECONDS_PER_DAY: i64 = 86400;

/// Visibility of a rendered note.
///
/// `Natural` restores the element's own display mode rather than forcing a
/// particular one, so a note hidden by one search comes back exactly as it
/// was rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Display {
    #[default]
    Natural,
    Hidden,
}

/// One note as rendered on the page.
///
/// # Fields
///
/// - `title_key` / `content_key`: lowercase copies used for matching
/// - `title` / `content`: the display regions, left untouched by search
/// - `display`: current visibility
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteItem {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub title_key: String,
    pub content_key: String,
    pub updated_at: i64,
    #[serde(default)]
    pub display: Display,
}

impl NoteItem {
    /// Creates a visible note, lowercasing the search keys on read.
    ///
    /// # Examples
    ///
    /// ```
    /// use notesift::domain::{Display, NoteItem};
    ///
    /// let note = NoteItem::new(1, "Meeting Notes", "Discuss BUDGET", 0);
    /// assert_eq!(note.title_key, "meeting notes");
    /// assert_eq!(note.content_key, "discuss budget");
    /// assert_eq!(note.display, Display::Natural);
    /// ```
    pub fn new(id: i64, title: impl Into<String>, content: impl Into<String>, updated_at: i64) -> Self {
        let title = title.into();
        let content = content.into();
        Self {
            id,
            title_key: title.to_lowercase(),
            content_key: content.to_lowercase(),
            title,
            content,
            updated_at,
            display: Display::Natural,
        }
    }

    /// Returns true if `term` occurs in the title key or the content key.
    ///
    /// `term` must already be lowercase. An empty term matches every note.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        self.title_key.contains(term) || self.content_key.contains(term)
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.display == Display::Natural
    }

    /// Human-readable age of the last update relative to `now`.
    ///
    /// # Examples
    ///
    /// ```
    /// use notesift::domain::NoteItem;
    ///
    /// let note = NoteItem::new(1, "Recipe", "pasta dish", 1_000);
    /// assert_eq!(note.updated_ago(1_030), "just now");
    /// assert_eq!(note.updated_ago(1_000 + 300), "5m ago");
    /// assert_eq!(note.updated_ago(1_000 + 3 * 3600), "3h ago");
    /// assert_eq!(note.updated_ago(1_000 + 2 * 86400), "2d ago");
    /// ```
    #[must_use]
    pub fn updated_ago(&self, now: i64) -> String {
        let diff = now - self.updated_at;

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            format!("{}m ago", diff / SECONDS_PER_MINUTE)
        } else if diff < SECONDS_PER_DAY {
            format!("{}h ago", diff / SECONDS_PER_HOUR)
        } else {
            format!("{}d ago", diff / SECONDS_PER_DAY)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_either_key() {
        let note = NoteItem::new(1, "Meeting Notes", "discuss budget", 0);
        assert!(note.matches("meeting"));
        assert!(note.matches("budget"));
        assert!(note.matches("ss bud"));
        assert!(!note.matches("pasta"));
    }

    #[test]
    fn empty_term_matches_everything() {
        let note = NoteItem::new(1, "", "", 0);
        assert!(note.matches(""));
    }

    #[test]
    fn keys_are_lowercase_but_display_text_is_not() {
        let note = NoteItem::new(7, "ÜBER Plan", "Call ANNA", 0);
        assert_eq!(note.title, "ÜBER Plan");
        assert_eq!(note.title_key, "über plan");
        assert!(note.matches("anna"));
        assert!(!note.matches("ANNA"));
    }

    #[test]
    fn hidden_notes_are_not_visible() {
        let mut note = NoteItem::new(1, "a", "b", 0);
        assert!(note.is_visible());
        note.display = Display::Hidden;
        assert!(!note.is_visible());
    }
}
