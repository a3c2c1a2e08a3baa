//! Visible date range and position mapping.
//!
//! The range spans the earliest to the latest event date, padded on both
//! sides by a number of calendar months. A [`DateRange`] can only be built
//! through a validating constructor, so `min < max` holds for every value and
//! [`DateRange::position`] never divides by zero.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::calendar::add_months;
use crate::error::TimelineError;
use crate::event::Event;

/// Calendar months added before the first and after the last event.
pub const DEFAULT_PADDING_MONTHS: u32 = 2;

/// Inclusive span of dates shown on the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    min: NaiveDate,
    max: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting empty spans (`max <= min`).
    pub fn new(min: NaiveDate, max: NaiveDate) -> Result<Self, TimelineError> {
        if max <= min {
            return Err(TimelineError::DegenerateRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Derive the padded range covering every event.
    pub fn from_events(events: &[Event], padding_months: u32) -> Result<Self, TimelineError> {
        let earliest = events.iter().map(|e| e.date).min();
        let latest = events.iter().map(|e| e.date).max();
        let (Some(earliest), Some(latest)) = (earliest, latest) else {
            return Err(TimelineError::NoEvents);
        };

        let padding = i32::try_from(padding_months)
            .map_err(|_| TimelineError::DateOverflow(earliest))?;
        let min = add_months(earliest, -padding).ok_or(TimelineError::DateOverflow(earliest))?;
        let max = add_months(latest, padding).ok_or(TimelineError::DateOverflow(latest))?;

        debug!(%earliest, %latest, %min, %max, padding_months, "Derived date range");
        Self::new(min, max)
    }

    /// First date on the axis.
    pub fn min(&self) -> NaiveDate {
        self.min
    }

    /// Last date on the axis.
    pub fn max(&self) -> NaiveDate {
        self.max
    }

    /// Number of days between `min` and `max` (always positive).
    pub fn span_days(&self) -> i64 {
        (self.max - self.min).num_days()
    }

    /// Check whether a date lies within `[min, max]`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min <= date && date <= self.max
    }

    /// Map a date to a percentage offset along the axis.
    ///
    /// `min` maps to `0.0` and `max` to `100.0`. Dates outside the range are
    /// not clamped and produce values below 0 or above 100.
    #[allow(clippy::cast_precision_loss)]
    pub fn position(&self, date: NaiveDate) -> f64 {
        let offset = (date - self.min).num_days() as f64;
        offset / self.span_days() as f64 * 100.0
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn fixture_events() -> Vec<Event> {
        vec![
            Event::new(d(2024, 11, 15), "Kickoff", "Project starts"),
            Event::new(d(2025, 3, 1), "Beta", "Beta release"),
            Event::new(d(2025, 6, 15), "Launch", "General availability"),
        ]
    }

    #[test]
    fn test_from_events_pads_two_months() {
        let range = DateRange::from_events(&fixture_events(), DEFAULT_PADDING_MONTHS).unwrap();
        assert_eq!(range.min(), d(2024, 9, 15));
        assert_eq!(range.max(), d(2025, 8, 15));
        assert_eq!(range.span_days(), 334);
    }

    #[test]
    fn test_from_events_ignores_input_order() {
        let mut events = fixture_events();
        events.reverse();
        let range = DateRange::from_events(&events, DEFAULT_PADDING_MONTHS).unwrap();
        assert_eq!(range.min(), d(2024, 9, 15));
        assert_eq!(range.max(), d(2025, 8, 15));
    }

    #[test]
    fn test_from_events_empty_is_error() {
        assert_eq!(
            DateRange::from_events(&[], DEFAULT_PADDING_MONTHS),
            Err(TimelineError::NoEvents)
        );
    }

    #[test]
    fn test_single_event_still_has_span() {
        let events = vec![Event::new(d(2024, 5, 1), "Only", "One event")];
        let range = DateRange::from_events(&events, DEFAULT_PADDING_MONTHS).unwrap();
        assert!(range.min() < range.max());
        assert_eq!(range.min(), d(2024, 3, 1));
        assert_eq!(range.max(), d(2024, 7, 1));
    }

    #[test]
    fn test_zero_padding_same_day_is_degenerate() {
        let events = vec![
            Event::new(d(2024, 5, 1), "A", ""),
            Event::new(d(2024, 5, 1), "B", ""),
        ];
        assert_eq!(
            DateRange::from_events(&events, 0),
            Err(TimelineError::DegenerateRange {
                min: d(2024, 5, 1),
                max: d(2024, 5, 1),
            })
        );
    }

    #[test]
    fn test_padding_uses_calendar_rollover() {
        let events = vec![
            Event::new(d(2025, 4, 30), "Late", ""),
            Event::new(d(2024, 12, 31), "Early", ""),
        ];
        let range = DateRange::from_events(&events, 2).unwrap();
        // Oct 31 exists, so subtracting is exact
        assert_eq!(range.min(), d(2024, 10, 31));
        // Jun 30 exists
        assert_eq!(range.max(), d(2025, 6, 30));

        let events = vec![Event::new(d(2024, 12, 31), "Only", "")];
        let range = DateRange::from_events(&events, 2).unwrap();
        assert_eq!(range.max(), d(2025, 3, 3));
    }

    #[test]
    fn test_events_lie_within_range() {
        let events = fixture_events();
        let range = DateRange::from_events(&events, DEFAULT_PADDING_MONTHS).unwrap();
        for event in &events {
            assert!(range.contains(event.date));
            let pct = range.position(event.date);
            assert!((0.0..=100.0).contains(&pct));
        }
    }

    #[test]
    fn test_position_endpoints() {
        let range = DateRange::new(d(2024, 1, 1), d(2024, 12, 31)).unwrap();
        assert_eq!(range.position(range.min()), 0.0);
        assert_eq!(range.position(range.max()), 100.0);
    }

    #[test]
    fn test_position_regression_fixture() {
        let range = DateRange::from_events(&fixture_events(), DEFAULT_PADDING_MONTHS).unwrap();
        // 167 of 334 days
        assert_eq!(range.position(d(2025, 3, 1)), 50.0);
    }

    #[test]
    fn test_position_outside_range_is_not_clamped() {
        let range = DateRange::new(d(2024, 1, 1), d(2024, 1, 11)).unwrap();
        assert_eq!(range.position(d(2023, 12, 31)), -10.0);
        assert_eq!(range.position(d(2024, 1, 21)), 200.0);
        assert!(!range.contains(d(2024, 1, 21)));
    }

    #[test]
    fn test_new_rejects_inverted_range() {
        assert!(DateRange::new(d(2024, 2, 1), d(2024, 1, 1)).is_err());
        assert!(DateRange::new(d(2024, 1, 1), d(2024, 1, 2)).is_ok());
    }
}
