//! Error types for caldesk.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur in caldesk operations.
#[derive(Error, Debug)]
pub enum CalDeskError {
    #[error("Event title cannot be empty")]
    MissingTitle,

    #[error("End time must be after start time (start {start}, end {end})")]
    InvalidInterval {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("This time slot is already booked by '{title}' ({id}). Please choose another time.")]
    Conflict { id: String, title: String },

    #[error("Event not found: {0}")]
    NotFound(String),

    #[error("Unknown scope '{0}'. Expected one of: day, week, month, year, all")]
    UnknownScope(String),

    #[error("Unknown view '{0}'. Expected one of: month, week, day")]
    UnknownView(String),

    #[error("Unknown color '{0}'")]
    UnknownColor(String),

    #[error("End date cannot be before start date")]
    InvalidRange,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for caldesk operations.
pub type CalDeskResult<T> = Result<T, CalDeskError>;
