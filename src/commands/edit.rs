use anyhow::Result;
use caldesk_core::{Event, EventColor, EventDraft};
use chrono_tz::Tz;
use owo_colors::OwoColorize;

use super::BookContext;
use crate::config::Settings;
use crate::parse;
use crate::render::Render;

/// Fields to change; anything left `None` keeps its current value.
#[derive(Default)]
pub struct EditArgs {
    pub title: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub color: Option<EventColor>,
}

pub fn run(settings: &Settings, id: &str, args: EditArgs) -> Result<()> {
    let mut ctx = BookContext::load(settings)?;

    let current = ctx
        .book
        .get(id)
        .ok_or_else(|| caldesk_core::CalDeskError::NotFound(id.to_string()))?;
    let draft = apply_edits(current, args, &settings.timezone)?;

    let event = ctx.book.update(id, draft)?.clone();
    ctx.save()?;

    println!("{} {}", "Updated".yellow(), event.render(&settings.timezone));
    Ok(())
}

/// Moving the start without a new end or duration keeps the event's length.
fn apply_edits(current: &Event, args: EditArgs, tz: &Tz) -> Result<EventDraft> {
    let mut draft = current.to_draft();

    if let Some(title) = args.title {
        draft.title = title;
    }
    if let Some(start) = args.start {
        draft.start = parse::parse_datetime(&start, tz)?;
    }

    draft.end = if let Some(end) = args.end {
        parse::parse_datetime(&end, tz)?
    } else if let Some(duration) = args.duration {
        parse::apply_duration(draft.start, &duration)?
    } else {
        draft.start + current.duration()
    };

    if let Some(description) = args.description {
        draft.description = Some(description).filter(|d| !d.is_empty());
    }
    if let Some(color) = args.color {
        draft.color = color;
    }

    Ok(draft)
}
