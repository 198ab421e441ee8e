//! Record validation for persisted events.
//!
//! A `StoredEvent` is one element of the persisted array exactly as it was
//! deserialized: every field optional, timestamps still strings. It becomes an
//! `Event` only after passing `is_valid`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::event::{Event, EventColor};

/// Naive date-time layouts accepted in addition to RFC 3339. Read as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Persisted representation of an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredEvent {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

/// Returns true iff `id` and `title` are present and non-empty and both dates
/// parse to valid timestamps.
///
/// The interval itself is not checked here: a loaded record whose end precedes
/// its start is still a record. Intervals are enforced on create/update.
pub fn is_valid(record: &StoredEvent) -> bool {
    is_present(record.id.as_deref())
        && is_present(record.title.as_deref())
        && record.start_date.as_deref().and_then(parse_timestamp).is_some()
        && record.end_date.as_deref().and_then(parse_timestamp).is_some()
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Parse a persisted timestamp.
///
/// Accepts RFC 3339 with any offset, naive ISO date-times and bare dates; the
/// naive forms are taken as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Format a timestamp the way snapshots store it (`2025-06-05T09:00:00.000Z`).
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl StoredEvent {
    /// Convert into a live `Event`, or `None` if the record is not valid.
    pub fn into_event(self) -> Option<Event> {
        if !is_valid(&self) {
            return None;
        }

        let start = self.start_date.as_deref().and_then(parse_timestamp)?;
        let end = self.end_date.as_deref().and_then(parse_timestamp)?;

        Some(Event {
            id: self.id?,
            title: self.title?,
            description: self.description.filter(|d| !d.is_empty()),
            start,
            end,
            color: EventColor::from_tag_lossy(self.color.as_deref()),
        })
    }
}

impl From<&Event> for StoredEvent {
    fn from(event: &Event) -> Self {
        StoredEvent {
            id: Some(event.id.clone()),
            title: Some(event.title.clone()),
            description: event.description.clone(),
            start_date: Some(format_timestamp(&event.start)),
            end_date: Some(format_timestamp(&event.end)),
            color: Some(event.color.tag().to_string()),
        }
    }
}
