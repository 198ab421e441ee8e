//! Report of events in a date range.
//!
//! The range test is inclusive on both ends and looks only at event start.

use chrono::{DateTime, Utc};

use crate::error::{CalDeskError, CalDeskResult};
use crate::event::Event;

/// Inclusive `[from, to]` range on event start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRange {
    from: DateTime<Utc>,
    to: DateTime<Utc>,
}

impl ReportRange {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> CalDeskResult<Self> {
        if to < from {
            return Err(CalDeskError::InvalidRange);
        }
        Ok(ReportRange { from, to })
    }

    pub fn from(&self) -> DateTime<Utc> {
        self.from
    }

    pub fn to(&self) -> DateTime<Utc> {
        self.to
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.from && instant <= self.to
    }
}

/// Events whose start lies in `range`, in input order.
pub fn events_in_range<'a>(events: &'a [Event], range: &ReportRange) -> Vec<&'a Event> {
    events.iter().filter(|e| range.contains(e.start)).collect()
}

/// One line of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub title: String,
    /// Event description, or `-` when there is none.
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub range: ReportRange,
    pub generated_at: DateTime<Utc>,
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// Build a report over `events`, sorted by start.
    pub fn build(events: &[Event], range: ReportRange, generated_at: DateTime<Utc>) -> Self {
        let mut rows: Vec<ReportRow> = events_in_range(events, &range)
            .into_iter()
            .map(|event| ReportRow {
                title: event.title.clone(),
                description: event
                    .description
                    .clone()
                    .unwrap_or_else(|| "-".to_string()),
                start: event.start,
                end: event.end,
            })
            .collect();
        rows.sort_by_key(|row| row.start);

        Report {
            range,
            generated_at,
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
