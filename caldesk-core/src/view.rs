//! Month/week/day view windows and navigation.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::CalDeskError;
use crate::event::Event;
use crate::scope::week_bounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    #[default]
    Month,
    Week,
    Day,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl CalendarView {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarView::Month => "month",
            CalendarView::Week => "week",
            CalendarView::Day => "day",
        }
    }

    /// First and last day (inclusive) shown by this view around `date`.
    pub fn window(&self, date: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            CalendarView::Day => (date, date),
            CalendarView::Week => week_bounds(date),
            CalendarView::Month => {
                let first = date.with_day(1).unwrap_or(date);
                let last = first
                    .checked_add_months(Months::new(1))
                    .and_then(|next| next.pred_opt())
                    .unwrap_or(NaiveDate::MAX);
                (first, last)
            }
        }
    }

    /// Step one view-length forward or back.
    ///
    /// Months clamp to the last valid day (Jan 31 + 1 month = Feb 28/29).
    pub fn navigate(&self, date: NaiveDate, direction: Direction) -> NaiveDate {
        let stepped = match (self, direction) {
            (CalendarView::Month, Direction::Next) => date.checked_add_months(Months::new(1)),
            (CalendarView::Month, Direction::Previous) => date.checked_sub_months(Months::new(1)),
            (CalendarView::Week, Direction::Next) => date.checked_add_days(Days::new(7)),
            (CalendarView::Week, Direction::Previous) => date.checked_sub_days(Days::new(7)),
            (CalendarView::Day, Direction::Next) => date.succ_opt(),
            (CalendarView::Day, Direction::Previous) => date.pred_opt(),
        };
        stepped.unwrap_or(date)
    }
}

impl FromStr for CalendarView {
    type Err = CalDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "month" => Ok(CalendarView::Month),
            "week" => Ok(CalendarView::Week),
            "day" => Ok(CalendarView::Day),
            _ => Err(CalDeskError::UnknownView(s.to_string())),
        }
    }
}

impl fmt::Display for CalendarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Events whose start day (in `tz`) falls in the view window, grouped by that
/// day. Days without events are omitted; each day is sorted by start.
pub fn events_by_day<'a, Tz: TimeZone>(
    events: &'a [Event],
    view: CalendarView,
    date: NaiveDate,
    tz: &Tz,
) -> BTreeMap<NaiveDate, Vec<&'a Event>> {
    let (first, last) = view.window(date);
    let mut days: BTreeMap<NaiveDate, Vec<&Event>> = BTreeMap::new();

    for event in events {
        let day = event.start_date_in(tz);
        if day >= first && day <= last {
            days.entry(day).or_default().push(event);
        }
    }

    for list in days.values_mut() {
        list.sort_by_key(|event| event.start);
    }

    days
}
