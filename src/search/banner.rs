//! The "no results" banner.

use super::term::SearchTerm;

/// Visual style of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerStyle {
    Info,
}

/// Feedback shown after the notes container when a non-empty search matched
/// nothing.
///
/// The message is fixed at creation. A later empty search with a different
/// term keeps the existing banner, so the message can name an older term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoResultsBanner {
    message: String,
    style: BannerStyle,
}

impl NoResultsBanner {
    /// Creates the banner for `term`.
    ///
    /// # Examples
    ///
    /// ```
    /// use notesift::search::{NoResultsBanner, SearchTerm};
    ///
    /// let banner = NoResultsBanner::for_term(&SearchTerm::from_input("XYZ"));
    /// assert_eq!(banner.message(), r#"No notes found matching "xyz""#);
    /// ```
    #[must_use]
    pub fn for_term(term: &SearchTerm) -> Self {
        Self {
            message: format!("No notes found matching \"{term}\""),
            style: BannerStyle::Info,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn style(&self) -> BannerStyle {
        self.style
    }
}
