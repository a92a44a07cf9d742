//! Worker thread implementation for reading the page snapshot.
//!
//! File I/O runs here so the plugin's render loop never blocks on disk. The
//! worker validates and orders the exported notes before converting them to
//! domain types.

use crate::domain::error::{NotesiftError, Result};
use crate::domain::{NoteItem, Page};
use crate::storage::backend::PageSource;
use crate::storage::models::PageSnapshot;
use crate::storage::{sort_by_recency, JsonPageSource};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state.
///
/// By default each `LoadPage` reads the JSON file named in the message. A
/// fixed [`PageSource`] can be injected instead.
#[derive(Serialize, Deserialize, Default)]
pub struct NotesiftWorker {
    #[serde(skip)]
    source: Option<Box<dyn PageSource>>,
}

impl NotesiftWorker {
    /// Creates a worker that reads every page from `source`.
    #[must_use]
    pub fn with_source(source: Box<dyn PageSource>) -> Self {
        Self {
            source: Some(source),
        }
    }

    /// Converts a snapshot into the page shown by the plugin.
    ///
    /// Notes with a blank title are dropped (the notes application never
    /// creates them), the rest are ordered most recently updated first.
    #[must_use]
    pub fn build_page(snapshot: PageSnapshot) -> Page {
        let PageSnapshot { anchors, mut notes } = snapshot;

        notes.retain(|record| {
            let keep = !record.title.trim().is_empty();
            if !keep {
                tracing::warn!(note_id = record.id, "dropping note without a title");
            }
            keep
        });
        sort_by_recency(&mut notes);

        let notes = notes
            .into_iter()
            .map(|record| {
                let updated_at = record.last_modified();
                NoteItem::new(record.id, record.title, record.content, updated_at)
            })
            .collect();

        Page { anchors, notes }
    }

    fn load(&self, path: &str) -> Result<PageSnapshot> {
        match &self.source {
            Some(source) => source.load_page(),
            None => JsonPageSource::new(path).load_page(),
        }
    }

    fn handle_load_page(&self, path: &str) -> WorkerResponse {
        match self.load(path) {
            Ok(snapshot) => {
                let page = Self::build_page(snapshot);
                tracing::debug!(note_count = page.notes.len(), "page ready");
                WorkerResponse::PageLoaded { page }
            }
            Err(e) => {
                tracing::debug!(path = %path, error = %e, "page load failed");
                WorkerResponse::Error {
                    message: format!("load page: {e}"),
                }
            }
        }
    }

    /// Reattaches the sender's trace context so worker spans join its trace.
    ///
    /// The returned guard must live for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());

        Some(
            opentelemetry::Context::current()
                .with_remote_span_context(span_context)
                .attach(),
        )
    }

    fn decode_message(payload: &str) -> Result<WorkerMessage> {
        serde_json::from_str(payload)
            .map_err(|e| NotesiftError::Worker(format!("invalid message: {e}")))
    }

    /// Processes a worker message and returns the response.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let _span = tracing::debug_span!("worker_handle_message", message_type = ?message).entered();

        match message {
            WorkerMessage::LoadPage { path, .. } => self.handle_load_page(&path),
        }
    }
}

static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for NotesiftWorker {
    /// Entry point for messages from the plugin thread.
    ///
    /// Initializes tracing once, decodes the payload, handles it and posts the
    /// JSON response back under the same message name.
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.swap(true, std::sync::atomic::Ordering::Relaxed) {
            crate::observability::init_tracing(&crate::Config::default());
        }

        let response = match Self::decode_message(&payload) {
            Ok(worker_message) => self.handle_message(worker_message),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                WorkerResponse::Error {
                    message: e.to_string(),
                }
            }
        };

        match serde_json::to_string(&response) {
            Ok(payload) => post_message_to_plugin(PluginMessage {
                name: message,
                payload,
                worker_name: None,
            }),
            Err(e) => tracing::debug!(error = %e, "failed to serialize worker response"),
        }
    }
}
