//! Scope filters for bulk deletion.
//!
//! The filter returns what survives a bulk delete, never what is deleted; the
//! caller replaces its whole set with the result.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, TimeZone};

use crate::error::CalDeskError;
use crate::event::Event;

/// Bulk-deletion granularity relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Day,
    Week,
    Month,
    Year,
    All,
}

impl Scope {
    pub const ALL: [Scope; 5] = [Scope::Day, Scope::Week, Scope::Month, Scope::Year, Scope::All];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Day => "day",
            Scope::Week => "week",
            Scope::Month => "month",
            Scope::Year => "year",
            Scope::All => "all",
        }
    }

    /// Whether an event starting on `start_day` is deleted under this scope.
    pub fn covers(&self, start_day: NaiveDate, reference: NaiveDate) -> bool {
        match self {
            Scope::Day => start_day == reference,
            Scope::Week => {
                let (week_start, week_end) = week_bounds(reference);
                start_day >= week_start && start_day <= week_end
            }
            Scope::Month => {
                start_day.month() == reference.month() && start_day.year() == reference.year()
            }
            Scope::Year => start_day.year() == reference.year(),
            Scope::All => true,
        }
    }
}

impl FromStr for Scope {
    type Err = CalDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Scope::Day),
            "week" => Ok(Scope::Week),
            "month" => Ok(Scope::Month),
            "year" => Ok(Scope::Year),
            "all" => Ok(Scope::All),
            _ => Err(CalDeskError::UnknownScope(s.to_string())),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First and last day of the Sunday-start week containing `reference`.
///
/// Clamped to the representable date range at either end.
pub fn week_bounds(reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = u64::from(reference.weekday().num_days_from_sunday());
    let start = reference
        .checked_sub_days(Days::new(offset))
        .unwrap_or(NaiveDate::MIN);
    let end = start
        .checked_add_days(Days::new(6))
        .unwrap_or(NaiveDate::MAX);
    (start, end)
}

/// Events that survive deleting `scope` around `reference`.
///
/// Each event is placed on the calendar day of its start instant in `tz`.
/// The input is left untouched.
pub fn filter_by_scope<Tz: TimeZone>(
    events: &[Event],
    scope: Scope,
    reference: NaiveDate,
    tz: &Tz,
) -> Vec<Event> {
    if scope == Scope::All {
        return Vec::new();
    }

    events
        .iter()
        .filter(|event| !scope.covers(event.start_date_in(tz), reference))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventDraft;
    use chrono::{DateTime, Utc};
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn event(id: &str, y: i32, m: u32, d: u32, h: u32) -> Event {
        let start = at(y, m, d, h);
        Event::with_id(id, EventDraft::new(id, start, start + chrono::Duration::hours(1)))
    }

    fn ids(events: &[Event]) -> Vec<&str> {
        events.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn day_removes_only_that_day() {
        let events = vec![event("fifth", 2025, 6, 5, 9), event("sixth", 2025, 6, 6, 9)];
        let kept = filter_by_scope(&events, Scope::Day, date(2025, 6, 5), &Utc);
        assert_eq!(ids(&kept), vec!["sixth"]);
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn day_ignores_time_of_day() {
        let events = vec![event("early", 2025, 6, 5, 0), event("late", 2025, 6, 5, 22)];
        assert!(filter_by_scope(&events, Scope::Day, date(2025, 6, 5), &Utc).is_empty());
    }

    #[test]
    fn week_bounds_start_on_sunday() {
        // 2025-06-05 is a Thursday.
        assert_eq!(week_bounds(date(2025, 6, 5)), (date(2025, 6, 1), date(2025, 6, 7)));
        // A Sunday is the first day of its own week.
        assert_eq!(week_bounds(date(2025, 6, 1)), (date(2025, 6, 1), date(2025, 6, 7)));
        // A Saturday is the last.
        assert_eq!(week_bounds(date(2025, 6, 7)), (date(2025, 6, 1), date(2025, 6, 7)));
    }

    #[test]
    fn week_bounds_clamp_at_the_ends_of_the_calendar() {
        for reference in [NaiveDate::MIN, NaiveDate::MAX] {
            let (first, last) = week_bounds(reference);
            assert!(first <= reference && reference <= last);
        }
        assert_eq!(week_bounds(NaiveDate::MAX).1, NaiveDate::MAX);
        assert!(Scope::Week.covers(NaiveDate::MAX, NaiveDate::MAX));
    }

    #[test]
    fn week_crossing_a_month_boundary() {
        let events = vec![
            event("may31", 2025, 5, 31, 10),
            event("jun1", 2025, 6, 1, 10),
            event("jul30", 2025, 7, 30, 10),
            event("aug2", 2025, 8, 2, 23),
            event("aug3", 2025, 8, 3, 0),
        ];
        let kept = filter_by_scope(&events, Scope::Week, date(2025, 7, 31), &Utc);
        assert_eq!(ids(&kept), vec!["may31", "jun1", "aug3"]);
    }

    #[test]
    fn month_requires_matching_year() {
        let events = vec![
            event("jun25", 2025, 6, 10, 9),
            event("jun24", 2024, 6, 10, 9),
            event("jul25", 2025, 7, 1, 9),
        ];
        let kept = filter_by_scope(&events, Scope::Month, date(2025, 6, 30), &Utc);
        assert_eq!(ids(&kept), vec!["jun24", "jul25"]);
    }

    #[test]
    fn year_removes_whole_year() {
        let events = vec![
            event("a", 2025, 1, 1, 0),
            event("b", 2025, 12, 31, 22),
            event("c", 2026, 1, 1, 0),
        ];
        let kept = filter_by_scope(&events, Scope::Year, date(2025, 6, 5), &Utc);
        assert_eq!(ids(&kept), vec!["c"]);
    }

    #[test]
    fn all_always_empties() {
        let events = vec![event("a", 2025, 1, 1, 0), event("b", 1999, 3, 3, 3)];
        assert!(filter_by_scope(&events, Scope::All, date(2030, 1, 1), &Utc).is_empty());
        assert!(filter_by_scope(&[], Scope::All, date(2030, 1, 1), &Utc).is_empty());
    }

    #[test]
    fn calendar_day_follows_time_zone() {
        // 23:00 UTC on the 5th is already the 6th in Zurich (UTC+2 in June).
        let events = vec![event("late", 2025, 6, 5, 23)];
        let zurich = chrono_tz::Europe::Zurich;
        assert!(filter_by_scope(&events, Scope::Day, date(2025, 6, 5), &Utc).is_empty());
        assert_eq!(filter_by_scope(&events, Scope::Day, date(2025, 6, 5), &zurich).len(), 1);
        assert!(filter_by_scope(&events, Scope::Day, date(2025, 6, 6), &zurich).is_empty());
    }

    #[test]
    fn parses_known_scopes_and_rejects_others() {
        for scope in Scope::ALL {
            assert_eq!(scope.as_str().parse::<Scope>().unwrap(), scope);
        }
        assert_eq!("WEEK".parse::<Scope>().unwrap(), Scope::Week);
        assert!(matches!(
            "fortnight".parse::<Scope>(),
            Err(CalDeskError::UnknownScope(s)) if s == "fortnight"
        ));
        assert!("".parse::<Scope>().is_err());
    }

    fn arb_events() -> impl Strategy<Value = Vec<Event>> {
        prop::collection::vec((0i64..(3 * 366 * 24), 1i64..48), 0..40).prop_map(|specs| {
            let base = at(2024, 1, 1, 0);
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (offset, len))| {
                    let start = base + chrono::Duration::hours(offset);
                    let end = start + chrono::Duration::hours(len);
                    Event::with_id(i.to_string(), EventDraft::new("e", start, end))
                })
                .collect()
        })
    }

    fn arb_scope() -> impl Strategy<Value = Scope> {
        prop::sample::select(Scope::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn filtering_twice_equals_filtering_once(
            events in arb_events(),
            scope in arb_scope(),
            day_offset in 0u64..(3 * 366),
        ) {
            let reference = date(2024, 1, 1) + Days::new(day_offset);
            let once = filter_by_scope(&events, scope, reference, &Utc);
            let twice = filter_by_scope(&once, scope, reference, &Utc);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn survivors_are_never_covered(
            events in arb_events(),
            scope in arb_scope(),
            day_offset in 0u64..(3 * 366),
        ) {
            let reference = date(2024, 1, 1) + Days::new(day_offset);
            let kept = filter_by_scope(&events, scope, reference, &Utc);
            prop_assert!(kept.len() <= events.len());
            for event in &kept {
                prop_assert!(!scope.covers(event.start_date_in(&Utc), reference));
            }
        }
    }
}
