//! Storage layer for the exported notes page.
//!
//! # Modules
//!
//! - `backend`: [`PageSource`] trait
//! - `json`: JSON file implementation
//! - `ordering`: most-recently-updated-first sorting
//! - `models`: snapshot record types separate from domain models

pub mod backend;
pub mod json;
pub mod models;
pub mod ordering;

pub use backend::PageSource;
pub use json::JsonPageSource;
pub use models::{NoteRecord, PageSnapshot};
pub use ordering::sort_by_recency;
