//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the notesift library and the Zellij plugin
//! system. Implements `ZellijPlugin` here and registers the library's
//! `ZellijWorker`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, search, event handling
//! │  └──────────────────┘   │
//! │          │              │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │  NotesiftWorker  │   │  ← Page snapshot reads
//! │  │ (worker thread)  │   │
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, Mouse, `CustomMessage`, `PermissionRequestResult`
//! 3. **Permissions granted**: Ask the worker to read the page snapshot
//! 4. **Update**: Translate events, delegate to the library layer
//! 5. **Render**: Call the library render function
//!
//! # Event Mapping
//!
//! - `Key` → [`notesift::app::map_key`] (Enter searches, characters edit
//!   the search text, arrows and `Ctrl+n`/`Ctrl+p` scroll, Esc hides)
//! - `Mouse(LeftClick)` on the search button → `Event::ButtonPressed`
//! - `Mouse(ScrollDown/ScrollUp)` → scroll the notes list
//! - `CustomMessage` from the worker → `Event::WorkerResponse`

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use notesift::app::map_key;
use notesift::worker::{NotesiftWorker, WorkerMessage, WorkerResponse};
use notesift::{handle_event, Action, Config, Event};

register_plugin!(State);
register_worker!(NotesiftWorker, notesift_worker, NOTESIFT_WORKER);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns: the worker
/// name for IPC and the last rendered width for mouse hit-testing.
struct State {
    app: notesift::app::AppState,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,

    /// Pane width from the most recent render.
    cols: usize,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: notesift::initialize(&default_config),
            worker_name: "notesift".to_string(),
            cols: 0,
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// - `ReadApplicationState`: Receive worker messages
    /// - `FullHdAccess`: Read the page snapshot from the host filesystem
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        notesift::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(page_file = %config.page_file, "parsed configuration");
        self.app = notesift::initialize(&config);

        request_permission(&[
            PermissionType::ReadApplicationState,
            PermissionType::FullHdAccess,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match map_key(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(mouse) => match self.map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                match permissions {
                    PermissionStatus::Granted => {
                        tracing::debug!("permissions granted - loading page");
                        Event::PermissionsGranted
                    }
                    PermissionStatus::Denied => {
                        tracing::warn!("permissions denied - page cannot be read");
                        return false;
                    }
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.cols = cols;
        self.app.set_viewport_rows(rows);
        notesift::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(_) => "Mouse".to_string(),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps mouse events to application events.
    ///
    /// Zellij reports 0-indexed pane coordinates; the layout works in
    /// 1-indexed terminal cells.
    fn map_mouse_event(&self, mouse: Mouse) -> Option<Event> {
        match mouse {
            Mouse::LeftClick(line, col) => {
                let row = usize::try_from(line).ok()? + 1;
                let col = col + 1;
                if self.app.hits_search_button(row, col, self.cols) {
                    tracing::debug!(row, col, "search button clicked");
                    Some(Event::ButtonPressed)
                } else {
                    None
                }
            }
            Mouse::ScrollDown(_) => Some(Event::ScrollDown),
            Mouse::ScrollUp(_) => Some(Event::ScrollUp),
            _ => None,
        }
    }

    /// Maps custom message events to application events.
    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message != self.worker_name {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }
        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    /// Serializes `message` as JSON and posts it to the worker thread.
    ///
    /// Serialization errors are logged, not propagated.
    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(&message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::PostToWorker(ref message) => {
                self.post_worker_message(message);
            }
        }
    }
}
