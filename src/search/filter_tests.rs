use super::*;
use crate::domain::{Display, PageAnchors};
use crate::search::Key;
use proptest::prelude::*;

fn page(notes: Vec<NoteItem>) -> Page {
    Page {
        anchors: PageAnchors::complete(),
        notes,
    }
}

fn meeting_and_recipe() -> SearchFilter {
    SearchFilter::attach(page(vec![
        NoteItem::new(1, "Meeting Notes", "discuss budget", 0),
        NoteItem::new(2, "Recipe", "pasta dish", 0),
    ]))
    .expect("complete anchors")
}

fn displays(filter: &SearchFilter) -> Vec<Display> {
    filter.items().iter().map(|item| item.display).collect()
}

#[test]
fn term_matching_one_note_hides_the_other() {
    let mut filter = meeting_and_recipe();

    filter.perform_search("budget");

    assert_eq!(displays(&filter), vec![Display::Natural, Display::Hidden]);
    assert!(filter.banner().is_none());
}

#[test]
fn term_matching_nothing_shows_banner() {
    let mut filter = meeting_and_recipe();

    filter.perform_search("xyz");

    assert_eq!(displays(&filter), vec![Display::Hidden, Display::Hidden]);
    assert_eq!(
        filter.banner().map(NoResultsBanner::message),
        Some(r#"No notes found matching "xyz""#)
    );
}

#[test]
fn empty_term_shows_everything() {
    let mut filter = meeting_and_recipe();

    filter.perform_search("");

    assert_eq!(displays(&filter), vec![Display::Natural, Display::Natural]);
    assert!(filter.banner().is_none());
}

#[test]
fn hidden_notes_come_back_when_term_clears() {
    let mut filter = meeting_and_recipe();

    filter.perform_search("pasta");
    assert_eq!(filter.visible_count(), 1);

    filter.perform_search("");
    assert_eq!(filter.visible_count(), 2);
}

#[test]
fn match_is_case_insensitive() {
    let mut filter = meeting_and_recipe();

    filter.perform_search("MEETING");

    assert_eq!(displays(&filter), vec![Display::Natural, Display::Hidden]);
}

#[test]
fn banner_keeps_first_term_on_repeated_empty_searches() {
    let mut filter = meeting_and_recipe();

    filter.perform_search("xyz");
    let first = filter.banner().cloned();

    let mutations = filter.perform_search("abc");

    assert!(mutations.is_empty());
    assert_eq!(filter.banner().cloned(), first);
    assert_eq!(
        filter.banner().map(NoResultsBanner::message),
        Some(r#"No notes found matching "xyz""#)
    );
}

#[test]
fn banner_is_removed_once_something_matches() {
    let mut filter = meeting_and_recipe();

    filter.perform_search("xyz");
    let mutations = filter.perform_search("recipe");

    assert!(mutations.contains(&Mutation::RemoveBanner));
    assert!(filter.banner().is_none());
    assert_eq!(displays(&filter), vec![Display::Hidden, Display::Natural]);
}

#[test]
fn second_identical_search_changes_nothing() {
    let mut filter = meeting_and_recipe();

    filter.perform_search("xyz");
    let snapshot = filter.clone();

    assert!(filter.perform_search("xyz").is_empty());
    assert_eq!(filter, snapshot);
}

#[test]
fn only_firing_triggers_search() {
    let mut filter = meeting_and_recipe();

    assert!(filter.on_trigger(Trigger::KeyRelease(Key::Char('x')), "xyz").is_none());
    assert!(filter.banner().is_none());

    assert!(filter.on_trigger(Trigger::KeyRelease(Key::Confirm), "xyz").is_some());
    assert!(filter.banner().is_some());

    assert!(filter.on_trigger(Trigger::Activate, "").is_some());
    assert!(filter.banner().is_none());
}

#[test]
fn empty_snapshot_with_empty_term_has_no_banner() {
    let mut filter = SearchFilter::attach(page(vec![])).expect("complete anchors");

    filter.perform_search("");

    assert_eq!(filter.visible_count(), 0);
    assert!(filter.banner().is_none());
}

#[test]
fn attach_hands_back_page_without_anchors() {
    let mut incomplete = page(vec![NoteItem::new(1, "a", "b", 0)]);
    incomplete.anchors.search_input = None;

    let returned = SearchFilter::attach(incomplete.clone()).unwrap_err();
    assert_eq!(returned, incomplete);
}

fn note_strategy() -> impl Strategy<Value = (String, String)> {
    ("[a-cA-C ]{0,6}", "[a-cA-C ]{0,6}")
}

proptest! {
    #[test]
    fn visibility_follows_substring_rule(
        notes in prop::collection::vec(note_strategy(), 0..8),
        input in "[a-cA-C]{0,3}",
    ) {
        let items: Vec<NoteItem> = notes
            .iter()
            .enumerate()
            .map(|(i, (title, content))| NoteItem::new(i as i64, title.clone(), content.clone(), 0))
            .collect();
        let mut filter = SearchFilter::attach(page(items)).expect("complete anchors");

        filter.perform_search(&input);

        let term = input.to_lowercase();
        for (item, (title, content)) in filter.items().iter().zip(&notes) {
            let expected = term.is_empty()
                || title.to_lowercase().contains(&term)
                || content.to_lowercase().contains(&term);
            prop_assert_eq!(item.is_visible(), expected);
        }

        let expect_banner = filter.visible_count() == 0 && !term.is_empty();
        prop_assert_eq!(filter.banner().is_some(), expect_banner);
    }

    #[test]
    fn repeated_search_is_idempotent(
        notes in prop::collection::vec(note_strategy(), 0..8),
        first in "[a-c]{0,3}",
        input in "[a-c]{0,3}",
    ) {
        let items: Vec<NoteItem> = notes
            .into_iter()
            .enumerate()
            .map(|(i, (title, content))| NoteItem::new(i as i64, title, content, 0))
            .collect();
        let mut filter = SearchFilter::attach(page(items)).expect("complete anchors");

        filter.perform_search(&first);
        filter.perform_search(&input);
        let once = filter.clone();
        let mutations = filter.perform_search(&input);

        prop_assert!(mutations.is_empty());
        prop_assert_eq!(filter, once);
    }
}
