//! Path handling for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, which
//! points at the directory Zellij was started from (usually `$HOME`).

use std::path::PathBuf;

/// Plugin data directory: `/host/.local/share/zellij/notesift`.
///
/// Holds the default page snapshot and the trace file.
///
/// # Examples
///
/// ```
/// use notesift::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/notesift"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("notesift")
}

/// Default location of the page snapshot.
#[must_use]
pub fn default_page_file() -> PathBuf {
    get_data_dir().join("page.json")
}

/// Expands a leading `~` to the sandbox `/host` mount.
///
/// # Examples
///
/// ```
/// use notesift::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/notes/page.json"), "/host/notes/page.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/data/page.json"), "/data/page.json");
/// assert_eq!(expand_tilde("~alice/page.json"), "~alice/page.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}
