//! Command-line date and time input.
//!
//! Date-times typed by the user are wall-clock times in the configured zone.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse a date-time such as "2025-06-05T09:30", "2025-06-05" (midnight) or
/// a phrase like "tomorrow 3pm".
pub fn parse_datetime(input: &str, tz: &Tz) -> Result<DateTime<Utc>> {
    let naive = parse_naive_datetime(input)?;
    localize(&naive, tz).with_context(|| format!("\"{}\" does not exist in {}", input, tz.name()))
}

/// Parse a calendar date: "2025-06-05", "today", "next friday".
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d") {
        return Ok(date);
    }
    Ok(parse_fuzzy(input)?.date())
}

/// First instant of `date` in `tz`.
pub fn start_of_day(date: NaiveDate, tz: &Tz) -> Result<DateTime<Utc>> {
    localize(&date.and_time(NaiveTime::MIN), tz)
        .with_context(|| format!("{} has no midnight in {}", date, tz.name()))
}

/// Last second of `date` in `tz`.
pub fn end_of_day(date: NaiveDate, tz: &Tz) -> Result<DateTime<Utc>> {
    let last_second = NaiveTime::from_hms_opt(23, 59, 59).context("invalid time")?;
    localize(&date.and_time(last_second), tz)
        .with_context(|| format!("{} has no 23:59:59 in {}", date, tz.name()))
}

/// Today's date in `tz`.
pub fn today(tz: &Tz) -> NaiveDate {
    Utc::now().with_timezone(tz).date_naive()
}

/// Default end: one hour after start.
pub fn default_end(start: DateTime<Utc>) -> DateTime<Utc> {
    start + Duration::hours(1)
}

/// Apply a duration string ("30m", "1h30m", "2hours") to a start time.
pub fn apply_duration(start: DateTime<Utc>, input: &str) -> Result<DateTime<Utc>> {
    try_apply_duration(start, input).with_context(|| format!("Could not parse duration: \"{}\"", input))
}

fn try_apply_duration(start: DateTime<Utc>, input: &str) -> Result<DateTime<Utc>> {
    let std_dur = humantime::parse_duration(input).map_err(|e| anyhow::anyhow!("{}", e))?;
    let chrono_dur = Duration::from_std(std_dur).context("Duration too large")?;
    Ok(start + chrono_dur)
}

fn parse_naive_datetime(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    parse_fuzzy(trimmed)
}

fn parse_fuzzy(input: &str) -> Result<NaiveDateTime> {
    let expanded = expand_abbreviations(input);
    fuzzydate::parse(&expanded).map_err(|_| anyhow::anyhow!("Could not parse date/time: \"{}\"", input))
}

/// Earliest mapping of a wall-clock time into `tz`, or `None` inside a DST gap.
fn localize(naive: &NaiveDateTime, tz: &Tz) -> Option<DateTime<Utc>> {
    tz.from_local_datetime(naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Expand day and month abbreviations that fuzzydate doesn't handle.
fn expand_abbreviations(input: &str) -> String {
    const ABBREVS: &[(&str, &str)] = &[
        ("mon", "monday"),
        ("tue", "tuesday"),
        ("tues", "tuesday"),
        ("wed", "wednesday"),
        ("thu", "thursday"),
        ("thurs", "thursday"),
        ("fri", "friday"),
        ("sat", "saturday"),
        ("sun", "sunday"),
        ("jan", "january"),
        ("feb", "february"),
        ("mar", "march"),
        ("apr", "april"),
        ("jun", "june"),
        ("jul", "july"),
        ("aug", "august"),
        ("sep", "september"),
        ("sept", "september"),
        ("oct", "october"),
        ("nov", "november"),
        ("dec", "december"),
    ];

    input
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            ABBREVS
                .iter()
                .find(|(abbr, _)| *abbr == word)
                .map(|(_, full)| *full)
                .unwrap_or(word)
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn iso_forms_are_local_to_zone() {
        let zurich = chrono_tz::Europe::Zurich;
        assert_eq!(parse_datetime("2025-06-05T09:30", &zurich).unwrap(), utc(2025, 6, 5, 7, 30));
        assert_eq!(parse_datetime("2025-06-05 09:30", &Tz::UTC).unwrap(), utc(2025, 6, 5, 9, 30));
        assert_eq!(parse_datetime("2025-06-05", &Tz::UTC).unwrap(), utc(2025, 6, 5, 0, 0));
    }

    #[test]
    fn nonexistent_local_time_is_rejected() {
        // Clocks jump from 02:00 to 03:00 in Zurich on 2025-03-30.
        let zurich = chrono_tz::Europe::Zurich;
        assert!(parse_datetime("2025-03-30T02:30", &zurich).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_datetime("not a date at all xyz", &Tz::UTC).is_err());
        assert!(parse_date("not a date at all xyz").is_err());
    }

    #[test]
    fn parses_plain_dates() {
        assert_eq!(parse_date("2025-06-05").unwrap(), NaiveDate::from_ymd_opt(2025, 6, 5).unwrap());
    }

    #[test]
    fn day_bounds_are_inclusive_edges() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        assert_eq!(start_of_day(date, &Tz::UTC).unwrap(), utc(2025, 6, 5, 0, 0));
        assert_eq!(
            end_of_day(date, &Tz::UTC).unwrap(),
            Utc.with_ymd_and_hms(2025, 6, 5, 23, 59, 59).unwrap()
        );
    }

    #[test]
    fn durations() {
        let start = utc(2025, 6, 5, 15, 0);
        assert_eq!(apply_duration(start, "30m").unwrap(), utc(2025, 6, 5, 15, 30));
        assert_eq!(apply_duration(start, "1h 30m").unwrap(), utc(2025, 6, 5, 16, 30));
        assert_eq!(default_end(start), utc(2025, 6, 5, 16, 0));
        assert!(apply_duration(start, "a while").is_err());
    }

    #[test]
    fn expands_abbreviations() {
        assert_eq!(expand_abbreviations("Fri 3pm"), "friday 3pm");
        assert_eq!(expand_abbreviations("mar 20"), "march 20");
        assert_eq!(expand_abbreviations("tomorrow"), "tomorrow");
    }
}
