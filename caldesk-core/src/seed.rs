//! Built-in events used when no valid saved data exists.

use chrono::{DateTime, TimeZone, Utc};

use crate::event::{Event, EventColor};

/// (id, title, description, (day, hour, minute) start, (day, hour, minute) end, color),
/// all in June 2025, UTC.
type SeedRow = (
    &'static str,
    &'static str,
    &'static str,
    (u32, u32, u32),
    (u32, u32, u32),
    EventColor,
);

const SEED: [SeedRow; 10] = [
    ("1", "Team Meeting", "Weekly team sync", (3, 1, 0), (3, 3, 0), EventColor::Orange),
    ("2", "Design Review", "UI/UX updates discussion", (14, 7, 30), (14, 10, 30), EventColor::Blue),
    ("3", "Project Review", "Monthly project review", (25, 11, 0), (25, 12, 0), EventColor::Green),
    ("4", "Meeting 1", "Discussion on task distribution", (5, 9, 0), (5, 12, 0), EventColor::Red),
    ("5", "Meeting 2", "Backend architecture deep dive", (5, 13, 0), (5, 17, 0), EventColor::Purple),
    ("6", "Meeting 3", "Frontend component review", (5, 18, 0), (5, 20, 0), EventColor::Pink),
    ("7", "Meeting 4", "Deployment checklist", (5, 21, 0), (5, 23, 0), EventColor::Yellow),
    ("8", "Meeting 5", "Weekly QA sync", (5, 6, 0), (5, 9, 0), EventColor::Cyan),
    ("9", "Meeting 1", "Client feedback session", (10, 10, 0), (10, 11, 0), EventColor::Teal),
    ("10", "Meeting 2", "Sprint planning", (10, 12, 0), (10, 14, 0), EventColor::Indigo),
];

fn june_2025((day, hour, minute): (u32, u32, u32)) -> DateTime<Utc> {
    // Constant input; every row above is a real June 2025 instant.
    Utc.with_ymd_and_hms(2025, 6, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

/// The default event set.
pub fn seed_events() -> Vec<Event> {
    SEED.iter()
        .map(|&(id, title, description, start, end, color)| Event {
            id: id.to_string(),
            title: title.to_string(),
            description: Some(description.to_string()),
            start: june_2025(start),
            end: june_2025(end),
            color,
        })
        .collect()
}
