//! OTLP JSON encoding for exported spans.
//!
//! Each exported batch becomes one JSON document in the OTLP/JSON layout
//! (`resourceSpans` → `scopeSpans` → `spans`), one document per line, so the
//! trace file can be fed to any OTLP file receiver.

use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as JsonValue};
use std::time::{SystemTime, UNIX_EPOCH};

/// Instrumentation scope name written into every batch.
const SCOPE_NAME: &str = "notesift";

/// Encodes span batches with the plugin's resource attributes.
pub struct OtlpFormatter {
    resource: Resource,
}

impl OtlpFormatter {
    pub const fn new(resource: Resource) -> Self {
        Self { resource }
    }

    /// Encodes one batch as a single OTLP document.
    pub fn format_batch(&self, batch: &[SpanData]) -> JsonValue {
        let resource_attributes: Vec<JsonValue> = self
            .resource
            .iter()
            .map(|(key, value)| attribute(key.as_str(), value))
            .collect();

        json!({
            "resourceSpans": [{
                "resource": { "attributes": resource_attributes },
                "scopeSpans": [{
                    "scope": { "name": SCOPE_NAME },
                    "spans": batch.iter().map(format_span).collect::<Vec<_>>()
                }]
            }]
        })
    }
}

impl std::fmt::Debug for OtlpFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OtlpFormatter").finish_non_exhaustive()
    }
}

fn format_span(span: &SpanData) -> JsonValue {
    let parent_span_id = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };
    let (status_code, status_message) = status(&span.status);

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent_span_id,
        "name": span.name,
        "kind": kind_code(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": attributes(&span.attributes),
        "events": span.events.iter().map(format_event).collect::<Vec<_>>(),
        "links": span.links.iter().map(format_link).collect::<Vec<_>>(),
        "status": { "code": status_code, "message": status_message },
    })
}

fn format_event(event: &Event) -> JsonValue {
    json!({
        "timeUnixNano": unix_nanos(event.timestamp),
        "name": event.name,
        "attributes": attributes(&event.attributes),
    })
}

fn format_link(link: &Link) -> JsonValue {
    json!({
        "traceId": format!("{:032x}", link.span_context.trace_id()),
        "spanId": format!("{:016x}", link.span_context.span_id()),
        "attributes": attributes(&link.attributes),
    })
}

/// Nanoseconds since the epoch as a decimal string; OTLP/JSON encodes
/// 64-bit integers as strings.
fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default()
        .to_string()
}

/// OTLP `SpanKind` enum value.
const fn kind_code(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn status(status: &Status) -> (u8, String) {
    match status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    }
}

fn attributes(attributes: &[KeyValue]) -> Vec<JsonValue> {
    attributes
        .iter()
        .map(|kv| attribute(kv.key.as_str(), &kv.value))
        .collect()
}

fn attribute(key: &str, value: &Value) -> JsonValue {
    json!({ "key": key, "value": any_value(value) })
}

/// OTLP `AnyValue`. Arrays are flattened to their debug text.
fn any_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.as_str() }),
        Value::Array(_) => json!({ "stringValue": format!("{value:?}") }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_encoded_as_strings() {
        assert_eq!(any_value(&Value::I64(42)), json!({ "intValue": "42" }));
        assert_eq!(
            attribute("note_count", &Value::I64(3)),
            json!({ "key": "note_count", "value": { "intValue": "3" } })
        );
    }

    #[test]
    fn error_status_keeps_its_description() {
        assert_eq!(status(&Status::Unset), (0, String::new()));
        assert_eq!(status(&Status::error("boom")), (2, "boom".to_string()));
    }

    #[test]
    fn empty_batch_carries_resource_and_scope() {
        let formatter = OtlpFormatter::new(Resource::new(vec![KeyValue::new("service.name", "notesift")]));

        let doc = formatter.format_batch(&[]);

        let resource_spans = &doc["resourceSpans"][0];
        assert_eq!(resource_spans["scopeSpans"][0]["scope"]["name"], "notesift");
        assert_eq!(resource_spans["scopeSpans"][0]["spans"], json!([]));
        let attributes = resource_spans["resource"]["attributes"].as_array().unwrap();
        assert!(attributes.contains(&json!({
            "key": "service.name",
            "value": { "stringValue": "notesift" }
        })));
    }

    #[test]
    fn times_before_the_epoch_clamp_to_zero() {
        assert_eq!(unix_nanos(UNIX_EPOCH), "0");
    }
}
