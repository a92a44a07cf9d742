//! Search term derived from the input field.

use std::fmt;

/// Lowercased value of the search input.
///
/// Recomputed on every search trigger and never stored beyond it, except
/// inside a [`NoResultsBanner`](super::NoResultsBanner) message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Builds a term from the raw input value.
    ///
    /// # Examples
    ///
    /// ```
    /// use notesift::search::SearchTerm;
    ///
    /// let term = SearchTerm::from_input("BudGet");
    /// assert_eq!(term.as_str(), "budget");
    /// ```
    #[must_use]
    pub fn from_input(input: &str) -> Self {
        Self(input.to_lowercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_is_kept() {
        let term = SearchTerm::from_input(" Pasta ");
        assert_eq!(term.as_str(), " pasta ");
        assert!(!term.is_empty());
    }

    #[test]
    fn empty_input_gives_empty_term() {
        assert!(SearchTerm::from_input("").is_empty());
    }
}
