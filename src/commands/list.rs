use anyhow::Result;
use caldesk_core::view::events_by_day;
use caldesk_core::{CalendarView, Direction, Event};
use chrono::NaiveDate;
use chrono_tz::Tz;
use owo_colors::OwoColorize;

use super::BookContext;
use crate::config::Settings;
use crate::parse;
use crate::render::{Render, format_date_label};

pub fn run(
    settings: &Settings,
    view: Option<CalendarView>,
    date: Option<String>,
    direction: Option<Direction>,
) -> Result<()> {
    let ctx = BookContext::load(settings)?;
    let view = view.unwrap_or(settings.default_view);

    let mut date = ctx.reference_date(date.as_deref())?;
    if let Some(direction) = direction {
        date = view.navigate(date, direction);
    }

    let tz = &settings.timezone;
    println!(
        "{}",
        render_agenda(ctx.book.events(), view, date, tz, parse::today(tz))
    );
    Ok(())
}

/// Heading naming the window shown (e.g. "June 2025", "Jun 1 - Jun 7, 2025").
fn window_title(view: CalendarView, date: NaiveDate) -> String {
    let (first, last) = view.window(date);
    match view {
        CalendarView::Month => date.format("%B %Y").to_string(),
        CalendarView::Week => format!(
            "{} - {}",
            first.format("%b %-d"),
            last.format("%b %-d, %Y")
        ),
        CalendarView::Day => date.format("%A, %B %-d, %Y").to_string(),
    }
}

fn render_agenda(
    events: &[Event],
    view: CalendarView,
    date: NaiveDate,
    tz: &Tz,
    today: NaiveDate,
) -> String {
    let mut lines = vec![window_title(view, date).bold().to_string()];

    let days = events_by_day(events, view, date, tz);
    if days.is_empty() {
        lines.push("No events".dimmed().to_string());
        return lines.join("\n");
    }

    for (day, day_events) in days {
        lines.push(String::new());
        lines.push(format_date_label(day, today).bold().to_string());
        for event in day_events {
            lines.push(format!("  {}", event.render(tz)));
        }
    }

    lines.join("\n")
}
