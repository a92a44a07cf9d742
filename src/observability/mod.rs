//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → FileSpanExporter → rotating JSON file
//! ```
//!
//! Traces go to `~/.local/share/zellij/notesift/notesift-otlp.json`, one OTLP
//! JSON document per exported batch. The file rotates at 10 MB and keeps three
//! numbered backups. The level comes from the `trace_level` plugin option
//! (default `info`, any `EnvFilter` directive works).
//!
//! Worker messages carry a [`TraceContext`](crate::worker::TraceContext) so
//! spans recorded on the worker thread join the plugin span that sent them.
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - `exporter`: file span exporter and tracer provider
//! - `otlp`: OTLP JSON encoding
//! - `rotation`: size-rotated file with numbered backups

mod exporter;
mod init;
mod otlp;
mod rotation;

pub use init::{init_tracing, TRACE_FILE_NAME};
