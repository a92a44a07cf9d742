//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the search/worker layers.
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`keys`]: Key press to event mapping
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod keys;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use keys::map_key;
pub use state::{AppState, PageState};
