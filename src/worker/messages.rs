//! Worker thread message types for cross-thread communication.
//!
//! Defines the request/response protocol between the plugin thread and the
//! background worker that reads the page snapshot, plus the trace context
//! that links worker spans to the plugin span that sent the request.

use crate::domain::Page;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the trace and span IDs of the current tracing span.
    ///
    /// Returns `None` when no valid OpenTelemetry context is active, e.g.
    /// when tracing was never initialized.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            tracing::trace!("no valid span context to propagate");
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Messages sent from the plugin thread to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Read the page snapshot at `path`.
    LoadPage {
        /// Sandbox path of the snapshot file.
        path: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Creates a `LoadPage` message carrying the current trace context.
    pub fn load_page(path: impl Into<String>) -> Self {
        Self::LoadPage {
            path: path.into(),
            trace_context: TraceContext::from_current(),
        }
    }

    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadPage { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Responses sent from the worker thread back to the plugin thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The page was read, validated and ordered.
    PageLoaded { page: Page },

    /// The page could not be read.
    Error {
        /// Human-readable error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NoteItem, PageAnchors};

    #[test]
    fn load_page_without_tracing_has_no_context() {
        let message = WorkerMessage::load_page("/host/page.json");
        assert!(message.trace_context().is_none());

        let json = serde_json::to_string(&message).unwrap();
        assert!(!json.contains("trace_context"));
    }

    #[test]
    fn page_response_survives_the_wire() {
        let response = WorkerResponse::PageLoaded {
            page: Page {
                anchors: PageAnchors::complete(),
                notes: vec![NoteItem::new(1, "Recipe", "pasta dish", 10)],
            },
        };

        let json = serde_json::to_string(&response).unwrap();
        let decoded: WorkerResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, response);
    }
}
