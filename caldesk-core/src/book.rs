//! The owned, authoritative event list.
//!
//! `EventBook` is the one place that mutates the set. Every mutation goes
//! through the pure checks in `conflict` and `scope` first, and a rejected
//! mutation leaves the set exactly as it was.

use chrono::{NaiveDate, TimeZone};
use tracing::info;

use crate::conflict::check_candidate;
use crate::error::{CalDeskError, CalDeskResult};
use crate::event::{Event, EventDraft};
use crate::scope::{Scope, filter_by_scope};
use crate::snapshot::{self, LoadSource};

#[derive(Debug, Clone, Default)]
pub struct EventBook {
    events: Vec<Event>,
}

impl EventBook {
    pub fn from_events(events: Vec<Event>) -> Self {
        EventBook { events }
    }

    /// Load from a saved snapshot (or `None` if nothing was saved).
    pub fn load(saved: Option<&str>) -> (Self, LoadSource) {
        let loaded = snapshot::decode(saved);
        (Self::from_events(loaded.events), loaded.source)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Add a new event with a fresh id.
    pub fn create(&mut self, draft: EventDraft) -> CalDeskResult<&Event> {
        self.check(&draft, None)?;

        let mut event = Event::from_draft(draft);
        while self.get(&event.id).is_some() {
            event.id = crate::event::new_event_id();
        }

        info!(id = %event.id, title = %event.title, "event created");
        self.events.push(event);
        Ok(&self.events[self.events.len() - 1])
    }

    /// Replace the event `id` in place, keeping its id and position.
    pub fn update(&mut self, id: &str, draft: EventDraft) -> CalDeskResult<&Event> {
        let index = self.position(id)?;
        self.check(&draft, Some(id))?;

        self.events[index] = Event::with_id(id, draft);
        info!(id, "event updated");
        Ok(&self.events[index])
    }

    /// Remove the event `id` and return it.
    pub fn delete(&mut self, id: &str) -> CalDeskResult<Event> {
        let index = self.position(id)?;
        let removed = self.events.remove(index);
        info!(id, "event deleted");
        Ok(removed)
    }

    /// Delete every event covered by `scope` around `reference`. Returns how many
    /// were removed.
    pub fn delete_scope<Tz: TimeZone>(
        &mut self,
        scope: Scope,
        reference: NaiveDate,
        tz: &Tz,
    ) -> usize {
        let survivors = filter_by_scope(&self.events, scope, reference, tz);
        let removed = self.events.len() - survivors.len();
        self.events = survivors;
        info!(%scope, %reference, removed, "events deleted by scope");
        removed
    }

    /// Serialize the current set for the persistence layer.
    pub fn snapshot(&self) -> CalDeskResult<String> {
        snapshot::encode(&self.events)
    }

    fn position(&self, id: &str) -> CalDeskResult<usize> {
        self.events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| CalDeskError::NotFound(id.to_string()))
    }

    fn check(&self, draft: &EventDraft, exclude_id: Option<&str>) -> CalDeskResult<()> {
        if draft.title.trim().is_empty() {
            return Err(CalDeskError::MissingTitle);
        }
        check_candidate(&draft.span(), &self.events, exclude_id)
    }
}
