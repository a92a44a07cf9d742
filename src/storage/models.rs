//! Page snapshot file format.
//!
//! These records mirror the JSON the notes application writes. They are kept
//! apart from the domain types: the worker validates, orders and converts
//! them into a [`Page`](crate::domain::Page) before handing them to the UI.

use crate::domain::PageAnchors;
use chrono::{DateTime, NaiveDateTime};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A note as exported by the notes application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    pub id: i64,

    pub title: String,

    /// Body text; `null` or missing means an empty note.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,

    /// Unix timestamp of creation. Missing or `null` reads as 0.
    #[serde(default, deserialize_with = "timestamp_or_zero")]
    pub created_at: i64,

    /// Unix timestamp of the last edit. Falls back to `created_at` when absent.
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub updated_at: Option<i64>,
}

impl NoteRecord {
    /// Creates a record with both timestamps set to `now`.
    ///
    /// # Examples
    ///
    /// ```
    /// use notesift::storage::NoteRecord;
    ///
    /// let record = NoteRecord::new(1, "Recipe", "pasta dish", 1_700_000_000);
    /// assert_eq!(record.last_modified(), 1_700_000_000);
    /// ```
    pub fn new(id: i64, title: impl Into<String>, content: impl Into<String>, now: i64) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            created_at: now,
            updated_at: Some(now),
        }
    }

    #[must_use]
    pub fn last_modified(&self) -> i64 {
        self.updated_at.unwrap_or(self.created_at)
    }
}

/// Top-level snapshot document: anchors flattened next to the notes array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    #[serde(flatten)]
    pub anchors: PageAnchors,

    #[serde(default)]
    pub notes: Vec<NoteRecord>,
}

/// Timestamp as the notes application may write it: unix seconds, or an
/// ISO-8601 string with or without a UTC offset.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Unix(i64),
    Iso(String),
}

impl RawTimestamp {
    fn into_unix(self) -> std::result::Result<i64, String> {
        match self {
            Self::Unix(seconds) => Ok(seconds),
            Self::Iso(text) => parse_iso(&text),
        }
    }
}

/// Parses RFC 3339 (`2024-05-01T10:00:00+00:00`) or a naive ISO datetime
/// (`2024-05-01T10:00:00.123456`), which is taken as UTC.
fn parse_iso(text: &str) -> std::result::Result<i64, String> {
    let text = text.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Ok(datetime.timestamp());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|naive| naive.and_utc().timestamp())
        .ok_or_else(|| format!("invalid timestamp: {text:?}"))
}

fn optional_timestamp<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawTimestamp>::deserialize(deserializer)?
        .map(RawTimestamp::into_unix)
        .transpose()
        .map_err(D::Error::custom)
}

fn timestamp_or_zero<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_timestamp(deserializer)?.unwrap_or_default())
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
