//! Event types.
//!
//! `Event` is the record held in the live set. It is only ever built from a
//! validated `StoredEvent` (see `validate`) or from an `EventDraft` accepted by
//! the `EventBook`, so its timestamps are always real instants.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, SubsecRound, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CalDeskError;

/// A calendar event in the live set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub color: EventColor,
}

impl Event {
    /// Build a new event from a draft, assigning a fresh id.
    pub fn from_draft(draft: EventDraft) -> Self {
        Self::with_id(new_event_id(), draft)
    }

    /// Build an event that keeps an existing id (used by updates).
    pub fn with_id(id: impl Into<String>, draft: EventDraft) -> Self {
        Event {
            id: id.into(),
            title: draft.title,
            description: draft.description.filter(|d| !d.is_empty()),
            start: to_millis(draft.start),
            end: to_millis(draft.end),
            color: draft.color,
        }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Calendar day of the start instant, as seen in `tz`.
    pub fn start_date_in<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        self.start.with_timezone(tz).date_naive()
    }

    /// The event as a draft, for partial edits.
    pub fn to_draft(&self) -> EventDraft {
        EventDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            start: self.start,
            end: self.end,
            color: self.color,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Fields for a new or edited event, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub description: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub color: EventColor,
}

impl EventDraft {
    pub fn new(title: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        EventDraft {
            title: title.into(),
            description: None,
            start,
            end,
            color: EventColor::default(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn color(mut self, color: EventColor) -> Self {
        self.color = color;
        self
    }
}

/// Truncate to the millisecond precision snapshots store.
pub(crate) fn to_millis(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.trunc_subsecs(3)
}

/// Generate an id for a newly created event.
///
/// UUIDv7 carries the creation time in its leading 48 bits, so ids sort by
/// creation order like the millisecond tokens older snapshots contain.
pub fn new_event_id() -> String {
    uuid::Uuid::now_v7().to_string()
}

/// Display color of an event. Serialized as its Tailwind class tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EventColor {
    #[default]
    #[serde(rename = "bg-blue-500")]
    Blue,
    #[serde(rename = "bg-green-500")]
    Green,
    #[serde(rename = "bg-orange-500")]
    Orange,
    #[serde(rename = "bg-red-500")]
    Red,
    #[serde(rename = "bg-purple-500")]
    Purple,
    #[serde(rename = "bg-pink-500")]
    Pink,
    #[serde(rename = "bg-yellow-500")]
    Yellow,
    #[serde(rename = "bg-cyan-500")]
    Cyan,
    #[serde(rename = "bg-teal-500")]
    Teal,
    #[serde(rename = "bg-indigo-500")]
    Indigo,
}

impl EventColor {
    pub const ALL: [EventColor; 10] = [
        EventColor::Blue,
        EventColor::Green,
        EventColor::Orange,
        EventColor::Red,
        EventColor::Purple,
        EventColor::Pink,
        EventColor::Yellow,
        EventColor::Cyan,
        EventColor::Teal,
        EventColor::Indigo,
    ];

    /// Persisted tag, e.g. `bg-blue-500`.
    pub fn tag(&self) -> &'static str {
        match self {
            EventColor::Blue => "bg-blue-500",
            EventColor::Green => "bg-green-500",
            EventColor::Orange => "bg-orange-500",
            EventColor::Red => "bg-red-500",
            EventColor::Purple => "bg-purple-500",
            EventColor::Pink => "bg-pink-500",
            EventColor::Yellow => "bg-yellow-500",
            EventColor::Cyan => "bg-cyan-500",
            EventColor::Teal => "bg-teal-500",
            EventColor::Indigo => "bg-indigo-500",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EventColor::Blue => "blue",
            EventColor::Green => "green",
            EventColor::Orange => "orange",
            EventColor::Red => "red",
            EventColor::Purple => "purple",
            EventColor::Pink => "pink",
            EventColor::Yellow => "yellow",
            EventColor::Cyan => "cyan",
            EventColor::Teal => "teal",
            EventColor::Indigo => "indigo",
        }
    }

    /// Parse a stored tag, falling back to the default color.
    ///
    /// Color is display-only, so an unrecognized tag never invalidates a record.
    pub fn from_tag_lossy(tag: Option<&str>) -> Self {
        tag.and_then(|t| t.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for EventColor {
    type Err = CalDeskError;

    /// Accepts either the plain name (`blue`) or the tag (`bg-blue-500`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        EventColor::ALL
            .into_iter()
            .find(|c| c.name() == needle || c.tag() == needle)
            .ok_or_else(|| CalDeskError::UnknownColor(s.to_string()))
    }
}

impl fmt::Display for EventColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
