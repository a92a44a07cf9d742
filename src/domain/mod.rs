//! Domain layer for the notesift plugin.
//!
//! Core types independent of Zellij APIs and storage formats.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`note`]: Rendered note items and their visibility
//! - [`page`]: The page snapshot with its anchor elements
//!
//! # Examples
//!
//! ```
//! use notesift::domain::{NoteItem, Page, PageAnchors};
//!
//! let page = Page {
//!     anchors: PageAnchors::complete(),
//!     notes: vec![NoteItem::new(1, "Recipe", "pasta dish", 0)],
//! };
//! assert!(page.anchors.resolve().is_some());
//! ```

pub mod error;
pub mod note;
pub mod page;

pub use error::{NotesiftError, Result};
pub use note::{Display, NoteItem};
pub use page::{Anchors, NotesContainer, Page, PageAnchors, SearchButton, SearchInput};
