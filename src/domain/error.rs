//! Error types for the notesift plugin.
//!
//! The search filter itself has no failure modes; these errors cover the
//! ambient layers around it (page loading, themes, worker messaging, config).

use thiserror::Error;

/// The main error type for notesift operations.
///
/// # Examples
///
/// ```
/// use notesift::NotesiftError;
///
/// fn read_page() -> Result<(), NotesiftError> {
///     Err(NotesiftError::Page("missing notes array".to_string()))
/// }
///
/// assert!(read_page().is_err());
/// ```
#[derive(Debug, Error)]
pub enum NotesiftError {
    /// The page snapshot could not be parsed.
    #[error("Page error: {0}")]
    Page(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    ///
    /// Occurs when the worker receives a payload it cannot decode.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for notesift operations.
pub type Result<T> = std::result::Result<T, NotesiftError>;
