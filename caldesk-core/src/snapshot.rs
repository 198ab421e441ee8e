//! Persisted snapshot format.
//!
//! A snapshot is a JSON array of `StoredEvent` objects. Decoding never fails:
//! corrupt or empty data falls back to the seed set, and individual records
//! that do not validate are dropped.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::CalDeskResult;
use crate::event::Event;
use crate::seed::seed_events;
use crate::validate::StoredEvent;

/// Where the loaded set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Saved data, after dropping invalid records.
    Saved,
    /// Nothing was saved; seed set.
    Empty,
    /// Saved data was not a JSON array; seed set.
    Corrupt,
    /// Saved data had no valid record; seed set.
    AllInvalid,
}

impl LoadSource {
    pub fn is_seeded(&self) -> bool {
        !matches!(self, LoadSource::Saved)
    }
}

/// Result of decoding a snapshot.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub events: Vec<Event>,
    pub source: LoadSource,
    /// Records present in the snapshot but dropped by validation.
    pub dropped: usize,
}

/// Serialize the live set.
pub fn encode(events: &[Event]) -> CalDeskResult<String> {
    let stored: Vec<StoredEvent> = events.iter().map(StoredEvent::from).collect();
    Ok(serde_json::to_string_pretty(&stored)?)
}

/// Decode a snapshot, or `None` when nothing has been saved yet.
pub fn decode(saved: Option<&str>) -> Loaded {
    let Some(raw) = saved.filter(|s| !s.trim().is_empty()) else {
        return seeded(LoadSource::Empty, 0);
    };

    let records: Vec<Value> = match serde_json::from_str(raw) {
        Ok(records) => records,
        Err(e) => {
            warn!("saved events are corrupt, using defaults: {e}");
            return seeded(LoadSource::Corrupt, 0);
        }
    };

    let total = records.len();
    let events: Vec<Event> = records
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<StoredEvent>(value) {
            Ok(record) => record.into_event(),
            Err(e) => {
                debug!("dropping malformed event record: {e}");
                None
            }
        })
        .collect();
    let dropped = total - events.len();

    if dropped > 0 {
        debug!("dropped {dropped} of {total} saved event records");
    }

    if events.is_empty() {
        warn!("no valid saved events, using defaults");
        return seeded(LoadSource::AllInvalid, dropped);
    }

    Loaded {
        events,
        source: LoadSource::Saved,
        dropped,
    }
}

fn seeded(source: LoadSource, dropped: usize) -> Loaded {
    Loaded {
        events: seed_events(),
        source,
        dropped,
    }
}
