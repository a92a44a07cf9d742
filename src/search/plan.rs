//! Pure search planning.
//!
//! [`plan`] computes the UI mutations a search needs without touching any
//! state. [`SearchFilter`](super::SearchFilter) applies them afterwards.
//! Only changes are emitted: planning against state that already reflects
//! the term yields an empty list.

use super::banner::NoResultsBanner;
use super::term::SearchTerm;
use crate::domain::{Display, NoteItem};

/// One change to the rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Sets the visibility of the note at `index` in the snapshot.
    SetDisplay { index: usize, display: Display },
    /// Inserts the banner right after the notes container.
    InsertBanner(NoResultsBanner),
    /// Removes the existing banner.
    RemoveBanner,
}

/// Plans the mutations that bring `items` and `banner` in line with `term`.
///
/// # Algorithm
///
/// 1. Each note is visible iff its title or content key contains the term
/// 2. Notes whose current display differs get a `SetDisplay`
/// 3. With zero visible notes and a non-empty term, a banner is inserted
///    unless one already exists (an existing banner is left as is)
/// 4. Otherwise an existing banner is removed
///
/// # Examples
///
/// ```
/// use notesift::domain::{Display, NoteItem};
/// use notesift::search::{plan, Mutation, SearchTerm};
///
/// let items = vec![
///     NoteItem::new(1, "Meeting Notes", "discuss budget", 0),
///     NoteItem::new(2, "Recipe", "pasta dish", 0),
/// ];
///
/// let mutations = plan(&items, &SearchTerm::from_input("budget"), None);
/// assert_eq!(
///     mutations,
///     vec![Mutation::SetDisplay { index: 1, display: Display::Hidden }]
/// );
/// ```
#[must_use]
pub fn plan(items: &[NoteItem], term: &SearchTerm, banner: Option<&NoResultsBanner>) -> Vec<Mutation> {
    let mut mutations = Vec::new();
    let mut visible_count = 0;

    for (index, item) in items.iter().enumerate() {
        let display = if item.matches(term.as_str()) {
            visible_count += 1;
            Display::Natural
        } else {
            Display::Hidden
        };

        if item.display != display {
            mutations.push(Mutation::SetDisplay { index, display });
        }
    }

    if visible_count == 0 && !term.is_empty() {
        if banner.is_none() {
            mutations.push(Mutation::InsertBanner(NoResultsBanner::for_term(term)));
        }
    } else if banner.is_some() {
        mutations.push(Mutation::RemoveBanner);
    }

    mutations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<NoteItem> {
        vec![
            NoteItem::new(1, "Meeting Notes", "discuss budget", 0),
            NoteItem::new(2, "Recipe", "pasta dish", 0),
        ]
    }

    #[test]
    fn no_match_hides_all_and_inserts_banner() {
        let term = SearchTerm::from_input("xyz");
        let mutations = plan(&items(), &term, None);

        assert_eq!(
            mutations,
            vec![
                Mutation::SetDisplay { index: 0, display: Display::Hidden },
                Mutation::SetDisplay { index: 1, display: Display::Hidden },
                Mutation::InsertBanner(NoResultsBanner::for_term(&term)),
            ]
        );
    }

    #[test]
    fn existing_banner_is_not_reinserted() {
        let stale = NoResultsBanner::for_term(&SearchTerm::from_input("xyz"));
        let mut hidden = items();
        for item in &mut hidden {
            item.display = Display::Hidden;
        }

        let mutations = plan(&hidden, &SearchTerm::from_input("abc"), Some(&stale));
        assert!(mutations.is_empty());
    }

    #[test]
    fn empty_term_shows_all_and_removes_banner() {
        let stale = NoResultsBanner::for_term(&SearchTerm::from_input("xyz"));
        let mut hidden = items();
        hidden[1].display = Display::Hidden;

        let mutations = plan(&hidden, &SearchTerm::default(), Some(&stale));
        assert_eq!(
            mutations,
            vec![
                Mutation::SetDisplay { index: 1, display: Display::Natural },
                Mutation::RemoveBanner,
            ]
        );
    }

    #[test]
    fn empty_collection_with_term_still_gets_banner() {
        let term = SearchTerm::from_input("anything");
        assert_eq!(
            plan(&[], &term, None),
            vec![Mutation::InsertBanner(NoResultsBanner::for_term(&term))]
        );
    }

    #[test]
    fn empty_collection_with_empty_term_plans_nothing() {
        assert!(plan(&[], &SearchTerm::default(), None).is_empty());
    }
}
