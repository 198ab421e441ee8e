//! Core event-store logic for caldesk.
//!
//! The pure operations live in three modules:
//! - `validate`: decide whether a deserialized record may enter the live set
//! - `conflict`: half-open overlap checks against the live set
//! - `scope`: what survives a day/week/month/year/all bulk delete
//!
//! `EventBook` owns the live set and applies those decisions; `snapshot`,
//! `report` and `view` serve the persistence, export and display layers.

pub mod book;
pub mod conflict;
pub mod error;
pub mod event;
pub mod report;
pub mod scope;
pub mod seed;
pub mod snapshot;
pub mod validate;
pub mod view;

pub use book::EventBook;
pub use conflict::{TimeSpan, check_candidate, find_conflict, has_conflict};
pub use error::{CalDeskError, CalDeskResult};
pub use event::{Event, EventColor, EventDraft};
pub use scope::{Scope, filter_by_scope};
pub use snapshot::{LoadSource, Loaded};
pub use validate::{StoredEvent, is_valid};
pub use view::{CalendarView, Direction};
