//! Time-conflict detection between a candidate and the live set.

use chrono::{DateTime, Utc};

use crate::error::{CalDeskError, CalDeskResult};
use crate::event::{Event, EventDraft, to_millis};

/// A `[start, end)` span of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSpan {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeSpan {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        TimeSpan { start, end }
    }

    /// Whether `self`, taken as a candidate, collides with `existing`.
    ///
    /// A conflict is any of: the candidate starts inside `[start, end)`, ends
    /// inside `(start, end]`, or fully covers the existing span. Spans that only
    /// touch at a boundary do not conflict.
    pub fn overlaps(&self, existing: &TimeSpan) -> bool {
        let starts_inside = self.start >= existing.start && self.start < existing.end;
        let ends_inside = self.end > existing.start && self.end <= existing.end;
        let covers = self.start <= existing.start && self.end >= existing.end;

        starts_inside || ends_inside || covers
    }
}

impl Event {
    pub fn span(&self) -> TimeSpan {
        TimeSpan::new(self.start, self.end)
    }
}

impl EventDraft {
    /// The span the draft will occupy once stored, at millisecond precision.
    pub fn span(&self) -> TimeSpan {
        TimeSpan::new(to_millis(self.start), to_millis(self.end))
    }
}

/// Returns true if `candidate` overlaps any event in `existing`, skipping the
/// event whose id equals `exclude_id`.
///
/// # Precondition
/// `candidate.start < candidate.end`. This is not re-checked; an inverted or
/// zero-length candidate gives a meaningless answer. Use [`check_candidate`]
/// when the candidate comes straight from user input.
pub fn has_conflict(candidate: &TimeSpan, existing: &[Event], exclude_id: Option<&str>) -> bool {
    find_conflict(candidate, existing, exclude_id).is_some()
}

/// Like [`has_conflict`], but returns the first conflicting event.
pub fn find_conflict<'a>(
    candidate: &TimeSpan,
    existing: &'a [Event],
    exclude_id: Option<&str>,
) -> Option<&'a Event> {
    existing
        .iter()
        .filter(|event| Some(event.id.as_str()) != exclude_id)
        .find(|event| candidate.overlaps(&event.span()))
}

/// Reject a candidate whose end is not strictly after its start.
pub fn check_interval(candidate: &TimeSpan) -> CalDeskResult<()> {
    if candidate.start >= candidate.end {
        return Err(CalDeskError::InvalidInterval {
            start: candidate.start,
            end: candidate.end,
        });
    }
    Ok(())
}

/// Interval check followed by the conflict check, in that order.
///
/// Returns `InvalidInterval` or `Conflict` so the caller can report the two
/// cases differently.
pub fn check_candidate(
    candidate: &TimeSpan,
    existing: &[Event],
    exclude_id: Option<&str>,
) -> CalDeskResult<()> {
    check_interval(candidate)?;

    match find_conflict(candidate, existing, exclude_id) {
        Some(other) => Err(CalDeskError::Conflict {
            id: other.id.clone(),
            title: other.title.clone(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 5, h, m, 0).unwrap()
    }

    fn span(sh: u32, sm: u32, eh: u32, em: u32) -> TimeSpan {
        TimeSpan::new(at(sh, sm), at(eh, em))
    }

    fn event(id: &str, sh: u32, sm: u32, eh: u32, em: u32) -> Event {
        Event::with_id(id, EventDraft::new(format!("event {id}"), at(sh, sm), at(eh, em)))
    }

    #[test]
    fn contained_candidate_conflicts() {
        let existing = vec![event("a", 10, 0, 11, 0)];
        assert!(has_conflict(&span(10, 30, 10, 45), &existing, None));
    }

    #[test]
    fn touching_before_does_not_conflict() {
        let existing = vec![event("a", 10, 0, 11, 0)];
        assert!(!has_conflict(&span(9, 0, 10, 0), &existing, None));
    }

    #[test]
    fn touching_after_does_not_conflict() {
        let existing = vec![event("a", 10, 0, 11, 0)];
        assert!(!has_conflict(&span(11, 0, 12, 0), &existing, None));
    }

    #[test]
    fn overlapping_tail_conflicts() {
        let existing = vec![event("a", 10, 0, 11, 0)];
        assert!(has_conflict(&span(10, 59, 12, 0), &existing, None));
    }

    #[test]
    fn overlapping_head_conflicts() {
        let existing = vec![event("a", 10, 0, 11, 0)];
        assert!(has_conflict(&span(9, 30, 10, 1), &existing, None));
    }

    #[test]
    fn covering_candidate_conflicts() {
        let existing = vec![event("a", 10, 0, 11, 0)];
        assert!(has_conflict(&span(8, 0, 13, 0), &existing, None));
        assert!(has_conflict(&span(10, 0, 11, 0), &existing, None));
    }

    #[test]
    fn editing_in_place_does_not_conflict_with_itself() {
        let existing = vec![event("a", 10, 0, 11, 0), event("b", 12, 0, 13, 0)];
        let same = existing[0].span();
        assert!(has_conflict(&same, &existing, None));
        assert!(!has_conflict(&same, &existing, Some("a")));
    }

    #[test]
    fn exclusion_only_skips_the_named_event() {
        let existing = vec![event("a", 10, 0, 11, 0), event("b", 10, 30, 12, 0)];
        let moved = span(10, 15, 10, 45);
        let hit = find_conflict(&moved, &existing, Some("a")).unwrap();
        assert_eq!(hit.id, "b");
    }

    #[test]
    fn empty_set_never_conflicts() {
        assert!(!has_conflict(&span(10, 0, 11, 0), &[], None));
    }

    #[test]
    fn check_candidate_rejects_inverted_and_zero_length() {
        let existing = vec![event("a", 10, 0, 11, 0)];
        assert!(matches!(
            check_candidate(&span(12, 0, 11, 0), &existing, None),
            Err(CalDeskError::InvalidInterval { .. })
        ));
        assert!(matches!(
            check_candidate(&span(12, 0, 12, 0), &existing, None),
            Err(CalDeskError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn check_candidate_reports_interval_before_conflict() {
        // Inverted and overlapping at the same time: the interval error wins.
        let existing = vec![event("a", 10, 0, 11, 0)];
        assert!(matches!(
            check_candidate(&span(10, 45, 10, 15), &existing, None),
            Err(CalDeskError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn check_candidate_names_the_conflicting_event() {
        let existing = vec![event("a", 10, 0, 11, 0)];
        match check_candidate(&span(10, 30, 11, 30), &existing, None) {
            Err(CalDeskError::Conflict { id, title }) => {
                assert_eq!(id, "a");
                assert_eq!(title, "event a");
            }
            other => panic!("expected conflict, got {other:?}"),
        }
        assert!(check_candidate(&span(11, 0, 11, 30), &existing, None).is_ok());
    }

    proptest! {
        #[test]
        fn adjacent_spans_never_conflict_either_way(
            start in 0i64..1_000_000,
            first_len in 1i64..10_000,
            second_len in 1i64..10_000,
        ) {
            let base = at(0, 0);
            let a = TimeSpan::new(
                base + chrono::Duration::seconds(start),
                base + chrono::Duration::seconds(start + first_len),
            );
            let b = TimeSpan::new(a.end, a.end + chrono::Duration::seconds(second_len));
            let ev_a = Event::with_id("a", EventDraft::new("a", a.start, a.end));
            let ev_b = Event::with_id("b", EventDraft::new("b", b.start, b.end));

            prop_assert!(!has_conflict(&a, &[ev_b], None));
            prop_assert!(!has_conflict(&b, &[ev_a], None));
        }

        #[test]
        fn detector_matches_half_open_overlap(
            a_start in 0i64..500, a_len in 1i64..200,
            b_start in 0i64..500, b_len in 1i64..200,
        ) {
            let base = at(0, 0);
            let m = |x: i64| base + chrono::Duration::minutes(x);
            let a = TimeSpan::new(m(a_start), m(a_start + a_len));
            let b = Event::with_id("b", EventDraft::new("b", m(b_start), m(b_start + b_len)));

            let expected = a.start < b.end && b.start < a.end;
            prop_assert_eq!(has_conflict(&a, &[b], None), expected);
        }
    }
}
