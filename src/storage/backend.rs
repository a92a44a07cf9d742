//! Page source abstraction.
//!
//! The worker only ever needs one operation from storage: read the page the
//! notes application exported. Keeping it behind a trait lets the worker be
//! exercised with an in-memory source.

use crate::domain::error::Result;
use crate::storage::models::PageSnapshot;

/// Something that can produce the exported page snapshot.
///
/// # Implementations
///
/// - [`JsonPageSource`](crate::storage::JsonPageSource): reads a JSON file
///
/// # Examples
///
/// ```no_run
/// use notesift::storage::{JsonPageSource, PageSource};
///
/// let source = JsonPageSource::new("/tmp/page.json");
/// let snapshot = source.load_page()?;
/// println!("{} notes", snapshot.notes.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait PageSource: Send {
    /// Reads the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or parsed.
    fn load_page(&self) -> Result<PageSnapshot>;
}
