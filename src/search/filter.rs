//! The search filter component.
//!
//! [`SearchFilter`] owns the note snapshot captured when the page loaded and
//! the optional no-results banner. It is only ever constructed for pages
//! that have all three anchors; otherwise the page stays static.

use super::banner::NoResultsBanner;
use super::plan::{plan, Mutation};
use super::term::SearchTerm;
use super::trigger::Trigger;
use crate::domain::{Anchors, NoteItem, Page};

/// Keeps note visibility and the banner in sync with the search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    anchors: Anchors,
    items: Vec<NoteItem>,
    banner: Option<NoResultsBanner>,
}

impl SearchFilter {
    /// Wires the filter to a freshly loaded page.
    ///
    /// Returns `None` when the page lacks the search input, the search button
    /// or the notes container. The note list is captured as-is; notes added
    /// to a later page are not tracked.
    ///
    /// # Examples
    ///
    /// ```
    /// use notesift::domain::{NoteItem, Page, PageAnchors};
    /// use notesift::search::SearchFilter;
    ///
    /// let page = Page {
    ///     anchors: PageAnchors::complete(),
    ///     notes: vec![NoteItem::new(1, "Recipe", "pasta dish", 0)],
    /// };
    /// assert!(SearchFilter::attach(page.clone()).is_ok());
    ///
    /// let bare = Page { anchors: PageAnchors::default(), ..page };
    /// assert!(SearchFilter::attach(bare).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Hands the page back unchanged when an anchor is missing, so the caller
    /// can still render it.
    #[allow(clippy::result_large_err)]
    pub fn attach(page: Page) -> std::result::Result<Self, Page> {
        let Some(anchors) = page.anchors.resolve() else {
            tracing::debug!(
                has_input = page.anchors.search_input.is_some(),
                has_button = page.anchors.search_button.is_some(),
                has_container = page.anchors.notes_container.is_some(),
                "search anchors missing, leaving page static"
            );
            return Err(page);
        };

        tracing::debug!(note_count = page.notes.len(), "search filter attached");

        Ok(Self {
            anchors,
            items: page.notes,
            banner: None,
        })
    }

    /// Handles a UI signal, searching with `input` when the signal fires.
    ///
    /// Returns the applied mutations, or `None` if the signal was plain
    /// editing.
    pub fn on_trigger(&mut self, trigger: Trigger, input: &str) -> Option<Vec<Mutation>> {
        trigger.fires().then(|| self.perform_search(input))
    }

    /// Runs a search for `input` and applies the result.
    ///
    /// Returns the mutations that were applied; an empty list means the page
    /// already matched the term.
    pub fn perform_search(&mut self, input: &str) -> Vec<Mutation> {
        let term = SearchTerm::from_input(input);
        let _span = tracing::debug_span!(
            "perform_search",
            term_len = term.as_str().len(),
            note_count = self.items.len()
        )
        .entered();

        let mutations = plan(&self.items, &term, self.banner.as_ref());
        self.apply(&mutations);

        tracing::debug!(
            mutation_count = mutations.len(),
            visible_count = self.visible_count(),
            banner = self.banner.is_some(),
            "search applied"
        );

        mutations
    }

    fn apply(&mut self, mutations: &[Mutation]) {
        for mutation in mutations {
            match mutation {
                Mutation::SetDisplay { index, display } => {
                    if let Some(item) = self.items.get_mut(*index) {
                        item.display = *display;
                    }
                }
                Mutation::InsertBanner(banner) => {
                    self.banner.get_or_insert_with(|| banner.clone());
                }
                Mutation::RemoveBanner => {
                    self.banner = None;
                }
            }
        }
    }

    #[must_use]
    pub const fn anchors(&self) -> &Anchors {
        &self.anchors
    }

    /// The note snapshot in page order, hidden notes included.
    #[must_use]
    pub fn items(&self) -> &[NoteItem] {
        &self.items
    }

    pub fn visible_items(&self) -> impl Iterator<Item = &NoteItem> {
        self.items.iter().filter(|item| item.is_visible())
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_items().count()
    }

    #[must_use]
    pub const fn banner(&self) -> Option<&NoResultsBanner> {
        self.banner.as_ref()
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
