//! Note search: the filter that toggles note visibility by a search term.
//!
//! # Flow
//!
//! ```text
//! Trigger (button / confirm key) → SearchTerm → plan() → Vec<Mutation> → apply
//! ```
//!
//! Planning is pure; [`SearchFilter`] owns the state it applies to: the note
//! snapshot and the optional [`NoResultsBanner`].
//!
//! # Modules
//!
//! - [`term`]: Lowercased search term
//! - [`trigger`]: Signals that start a search
//! - [`banner`]: The no-results banner
//! - [`plan`]: Pure mutation planning
//! - [`filter`]: The stateful component
//!
//! # Example
//!
//! ```rust
//! use notesift::domain::{NoteItem, Page, PageAnchors};
//! use notesift::search::{SearchFilter, Trigger};
//!
//! let page = Page {
//!     anchors: PageAnchors::complete(),
//!     notes: vec![NoteItem::new(1, "Recipe", "pasta dish", 0)],
//! };
//! let mut filter = SearchFilter::attach(page).unwrap();
//! filter.on_trigger(Trigger::Activate, "xyz");
//! assert!(filter.banner().is_some());
//! ```

pub mod banner;
pub mod filter;
pub mod plan;
pub mod term;
pub mod trigger;

pub use banner::{BannerStyle, NoResultsBanner};
pub use filter::SearchFilter;
pub use plan::{plan, Mutation};
pub use term::SearchTerm;
pub use trigger::{Key, Trigger};
