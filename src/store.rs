//! The saved-events file.

use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use caldesk_core::{EventBook, LoadSource};
use tracing::{debug, warn};

/// Read the saved events at `path`.
///
/// A missing, unreadable-as-text or corrupt file is not an error: the book
/// falls back to the built-in events.
pub fn load(path: &Path) -> Result<EventBook> {
    let saved = match std::fs::read_to_string(path) {
        Ok(contents) => Some(contents),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            warn!("saved events at {} are not valid UTF-8", path.display());
            None
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read saved events at {}", path.display()));
        }
    };

    let (book, source) = EventBook::load(saved.as_deref());

    match source {
        LoadSource::Saved => debug!("loaded {} events from {}", book.len(), path.display()),
        LoadSource::Empty => debug!("no saved events at {}, using defaults", path.display()),
        LoadSource::Corrupt | LoadSource::AllInvalid => {
            warn!("ignoring saved events at {}, using defaults", path.display())
        }
    }

    Ok(book)
}

/// Write the book to `path`, replacing the previous contents.
pub fn save(path: &Path, book: &EventBook) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory at {}", parent.display()))?;
    }

    let contents = book.snapshot().context("Failed to serialize events")?;

    // Replaced by rename, never written in place.
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, contents)
        .with_context(|| format!("Failed to write saved events at {}", tmp.display()))?;
    std::fs::rename(&tmp, path)
        .with_context(|| format!("Failed to replace saved events at {}", path.display()))?;

    debug!("saved {} events to {}", book.len(), path.display());
    Ok(())
}
