//! Event handling and state transition logic.
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime or worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Example
//!
//! ```rust
//! use notesift::app::{handle_event, AppState, Event};
//! use notesift::ui::Theme;
//!
//! let mut state = AppState::new("/host/page.json", Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::PermissionsGranted)?;
//! assert!(!render);
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), notesift::NotesiftError>(())
//! ```

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::search::{Key, Trigger};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, system changes, or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key was released while the plugin had focus.
    Key(Key),

    /// The search button was activated (clicked).
    ButtonPressed,

    /// Moves the notes window down by one visible note.
    ScrollDown,
    /// Moves the notes window up by one visible note.
    ScrollUp,

    /// Hides the plugin pane.
    CloseFocus,

    /// The user granted the requested permissions; the page can be read.
    PermissionsGranted,

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns whether to
/// re-render plus the actions to execute.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the handler signature stable for
/// the plugin shim.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Key(Key::Escape) | Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Key(Key::Char(c)) => Ok((state.push_char(*c), vec![])),
        Event::Key(Key::Backspace) => Ok((state.pop_char(), vec![])),
        Event::Key(key @ Key::Confirm) => {
            let searched = state.fire(Trigger::KeyRelease(*key));
            if !searched {
                tracing::debug!("confirm ignored, search not wired");
            }
            Ok((searched, vec![]))
        }
        Event::ButtonPressed => Ok((state.fire(Trigger::Activate), vec![])),
        Event::ScrollDown => Ok((state.scroll_down(), vec![])),
        Event::ScrollUp => Ok((state.scroll_up(), vec![])),
        Event::PermissionsGranted => {
            tracing::debug!(page_file = %state.page_file, "requesting page load");
            Ok((
                false,
                vec![Action::PostToWorker(WorkerMessage::load_page(state.page_file.clone()))],
            ))
        }
        Event::WorkerResponse(response) => match response {
            WorkerResponse::PageLoaded { page } => {
                let loaded = state.load_page(page.clone());
                if loaded {
                    tracing::debug!(
                        note_count = state.total_notes(),
                        wired = state.search_button_label().is_some(),
                        "page initialized"
                    );
                }
                Ok((loaded, vec![]))
            }
            WorkerResponse::Error { message } => {
                tracing::error!("Worker error: {}", message);
                state.load_error = Some(message.clone());
                Ok((true, vec![]))
            }
        },
    }
}
