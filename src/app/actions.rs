//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event; the
//! plugin shim executes them in order. Searching itself is not an action: it
//! mutates state synchronously inside the handler.
//!
//! # Example
//!
//! ```rust
//! use notesift::app::Action;
//! use notesift::worker::WorkerMessage;
//!
//! let actions = vec![Action::PostToWorker(WorkerMessage::load_page("/host/page.json"))];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Posts a message to the background worker thread.
    PostToWorker(WorkerMessage),
}
