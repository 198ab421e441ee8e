use anyhow::Result;
use caldesk_core::{EventColor, EventDraft};
use owo_colors::OwoColorize;

use super::BookContext;
use crate::config::Settings;
use crate::parse;
use crate::render::Render;

pub struct NewArgs {
    pub title: String,
    pub start: String,
    pub end: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub color: Option<EventColor>,
}

pub fn run(settings: &Settings, args: NewArgs) -> Result<()> {
    let mut ctx = BookContext::load(settings)?;
    let draft = build_draft(settings, args)?;

    let event = ctx.book.create(draft)?.clone();
    ctx.save()?;

    println!("{} {}", "Created".green(), event.render(&settings.timezone));
    Ok(())
}

fn build_draft(settings: &Settings, args: NewArgs) -> Result<EventDraft> {
    let tz = &settings.timezone;
    let start = parse::parse_datetime(&args.start, tz)?;

    let end = if let Some(end) = args.end {
        parse::parse_datetime(&end, tz)?
    } else if let Some(duration) = args.duration {
        parse::apply_duration(start, &duration)?
    } else {
        parse::default_end(start)
    };

    let mut draft = EventDraft::new(args.title, start, end)
        .color(args.color.unwrap_or(settings.default_color));
    if let Some(description) = args.description {
        draft = draft.description(description);
    }
    Ok(draft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use chrono::{TimeZone, Utc};

    fn settings() -> Settings {
        Settings::resolve(Config::default(), Some("/unused.json".into()), Some("Europe/Zurich".into()))
            .unwrap()
    }

    fn args(start: &str) -> NewArgs {
        NewArgs {
            title: "Dentist".to_string(),
            start: start.to_string(),
            end: None,
            duration: None,
            description: None,
            color: None,
        }
    }

    #[test]
    fn defaults_to_one_hour_in_default_color() {
        let draft = build_draft(&settings(), args("2025-06-20T15:00")).unwrap();
        assert_eq!(draft.start, Utc.with_ymd_and_hms(2025, 6, 20, 13, 0, 0).unwrap());
        assert_eq!(draft.end, Utc.with_ymd_and_hms(2025, 6, 20, 14, 0, 0).unwrap());
        assert_eq!(draft.color, EventColor::Blue);
        assert_eq!(draft.description, None);
    }

    #[test]
    fn duration_and_explicit_fields() {
        let mut a = args("2025-06-20T15:00");
        a.duration = Some("45m".into());
        a.description = Some("Checkup".into());
        a.color = Some(EventColor::Red);
        let draft = build_draft(&settings(), a).unwrap();
        assert_eq!(draft.end, Utc.with_ymd_and_hms(2025, 6, 20, 13, 45, 0).unwrap());
        assert_eq!(draft.description.as_deref(), Some("Checkup"));
        assert_eq!(draft.color, EventColor::Red);
    }

    #[test]
    fn explicit_end_is_not_reordered() {
        let mut a = args("2025-06-20T15:00");
        a.end = Some("2025-06-20T14:00".into());
        let draft = build_draft(&settings(), a).unwrap();
        assert!(draft.end < draft.start);
    }
}
