//! Display ordering for exported notes.
//!
//! The notes page lists the most recently edited note first. Records that
//! share a timestamp keep a stable order by descending id, so newer notes
//! win ties.

use super::models::NoteRecord;
use std::cmp::Reverse;

/// Sorts records most recently updated first.
///
/// # Examples
///
/// ```
/// use notesift::storage::{sort_by_recency, NoteRecord};
///
/// let mut records = vec![
///     NoteRecord::new(1, "old", "", 100),
///     NoteRecord::new(2, "new", "", 200),
/// ];
/// sort_by_recency(&mut records);
/// assert_eq!(records[0].title, "new");
/// ```
pub fn sort_by_recency(records: &mut [NoteRecord]) {
    records.sort_by_key(|record| (Reverse(record.last_modified()), Reverse(record.id)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_break_by_newer_id() {
        let mut records = vec![
            NoteRecord::new(4, "a", "", 50),
            NoteRecord::new(9, "b", "", 50),
            NoteRecord::new(1, "c", "", 80),
        ];

        sort_by_recency(&mut records);

        let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 9, 4]);
    }

    #[test]
    fn missing_update_time_uses_creation_time() {
        let mut edited = NoteRecord::new(1, "edited", "", 10);
        edited.updated_at = Some(300);
        let mut untouched = NoteRecord::new(2, "untouched", "", 200);
        untouched.updated_at = None;

        let mut records = vec![untouched, edited];
        sort_by_recency(&mut records);

        assert_eq!(records[0].title, "edited");
    }
}
