//! Infrastructure layer for filesystem and environment interactions.
//!
//! Utilities for the Zellij plugin sandbox, where the host filesystem is
//! mounted under `/host`.

pub mod paths;

pub use paths::{default_page_file, expand_tilde, get_data_dir};
