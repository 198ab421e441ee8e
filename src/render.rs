//! Terminal rendering for caldesk types.
//!
//! Extension traits that add colored output to caldesk-core types using
//! owo_colors. Times are always shown in the configured zone.

use caldesk_core::report::Report;
use caldesk_core::{Event, EventColor};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self, tz: &Tz) -> String;
}

/// RGB of the Tailwind 500 shade behind each color tag.
fn rgb(color: EventColor) -> (u8, u8, u8) {
    match color {
        EventColor::Blue => (59, 130, 246),
        EventColor::Green => (34, 197, 94),
        EventColor::Orange => (249, 115, 22),
        EventColor::Red => (239, 68, 68),
        EventColor::Purple => (168, 85, 247),
        EventColor::Pink => (236, 72, 153),
        EventColor::Yellow => (234, 179, 8),
        EventColor::Cyan => (6, 182, 212),
        EventColor::Teal => (20, 184, 166),
        EventColor::Indigo => (99, 102, 241),
    }
}

/// A colored bullet for the event's palette entry.
pub fn swatch(color: EventColor) -> String {
    let (r, g, b) = rgb(color);
    "●".truecolor(r, g, b).to_string()
}

impl Render for Event {
    fn render(&self, tz: &Tz) -> String {
        let time = format!(
            "{}-{}",
            format_time(self.start, tz),
            format_time(self.end, tz)
        );
        let mut line = format!("{} {} {}", time, swatch(self.color), self.title);
        if let Some(description) = &self.description {
            line.push_str(&format!(" {}", format!("({})", description).dimmed()));
        }
        line.push_str(&format!(" {}", format!("[{}]", self.id).dimmed()));
        line
    }
}

impl Render for Report {
    fn render(&self, tz: &Tz) -> String {
        let mut lines = vec![
            format!(
                "{} {} to {}",
                "Event report".bold(),
                format_day(self.range.from(), tz),
                format_day(self.range.to(), tz)
            ),
            format!("Generated {}", format_datetime(self.generated_at, tz))
                .dimmed()
                .to_string(),
            String::new(),
        ];

        if self.rows.is_empty() {
            lines.push("No events in this range".dimmed().to_string());
            return lines.join("\n");
        }

        let title_width = self
            .rows
            .iter()
            .map(|row| row.title.chars().count())
            .chain(std::iter::once("Title".len()))
            .max()
            .unwrap_or(0);

        lines.push(
            format!(
                "{:<title_width$}  {:<16}  {:<16}  {}",
                "Title", "Start", "End", "Description"
            )
            .bold()
            .to_string(),
        );
        for row in &self.rows {
            lines.push(format!(
                "{:<title_width$}  {:<16}  {:<16}  {}",
                row.title,
                format_datetime(row.start, tz),
                format_datetime(row.end, tz),
                row.description
            ));
        }
        lines.push(String::new());
        lines.push(format!("{} {}", self.len(), pluralize("event", self.len())).dimmed().to_string());

        lines.join("\n")
    }
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Thu Jun 5")
pub fn format_date_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

pub fn format_time(instant: DateTime<Utc>, tz: &Tz) -> String {
    instant.with_timezone(tz).format("%H:%M").to_string()
}

pub fn format_datetime(instant: DateTime<Utc>, tz: &Tz) -> String {
    instant.with_timezone(tz).format("%Y-%m-%d %H:%M").to_string()
}

fn format_day(instant: DateTime<Utc>, tz: &Tz) -> String {
    instant.with_timezone(tz).format("%Y-%m-%d").to_string()
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
