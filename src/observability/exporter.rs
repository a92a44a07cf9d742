//! File-backed span exporter and the tracer provider that drives it.
//!
//! The plugin runs in a WASI sandbox without network access, so spans are
//! written as OTLP JSON lines to a rotating file instead of sent to a collector.

use super::otlp::OtlpFormatter;
use super::rotation::{RotatingFile, RotationPolicy};
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Writes each exported batch as one OTLP JSON line.
#[derive(Debug)]
struct FileSpanExporter {
    file: RotatingFile,
    formatter: OtlpFormatter,
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    const fn new(file: RotatingFile, resource: Resource) -> Self {
        Self {
            file,
            formatter: OtlpFormatter::new(resource),
            is_shutdown: AtomicBool::new(false),
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Err(TraceError::from("exporter is shut down"));
        }

        let line = self.formatter.format_batch(batch).to_string();
        self.file
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    /// The resource is fixed at construction.
    fn set_resource(&mut self, _res: &Resource) {}
}

/// Builds a provider that exports every finished span to `file_path`.
///
/// Uses the simple (synchronous) span processor: the sandbox has no async
/// runtime to drive a batch processor.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let file = RotatingFile::new(file_path, RotationPolicy::default());
    let exporter = FileSpanExporter::new(file, resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Span, Tracer, TracerProvider as _};
    use opentelemetry::KeyValue;

    #[test]
    fn finished_spans_land_in_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notesift-otlp.json");
        let resource = Resource::new(vec![KeyValue::new("service.name", "notesift")]);

        let provider = create_tracer_provider(path.clone(), resource);
        let mut span = provider.tracer("test").start("perform_search");
        span.set_attribute(KeyValue::new("term_len", 6_i64));
        span.end();

        let contents = std::fs::read_to_string(&path).unwrap();
        let doc: serde_json::Value = serde_json::from_str(contents.lines().next().unwrap()).unwrap();
        let span = &doc["resourceSpans"][0]["scopeSpans"][0]["spans"][0];
        assert_eq!(span["name"], "perform_search");
        assert_eq!(span["attributes"][0]["value"]["intValue"], "6");
    }

    #[test]
    fn shut_down_exporter_rejects_batches() {
        let dir = tempfile::tempdir().unwrap();
        let file = RotatingFile::new(dir.path().join("t.json"), RotationPolicy::default());
        let mut exporter = FileSpanExporter::new(file, Resource::empty());

        exporter.shutdown();

        assert!(exporter.write_batch(&[]).is_err());
        assert!(!dir.path().join("t.json").exists());
    }
}
