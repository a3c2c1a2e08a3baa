//! Timeline model: a fixed event list plus its derived range.

use chrono::NaiveDate;

use crate::error::TimelineError;
use crate::event::Event;
use crate::markers::{Markers, ZoomTier};
use crate::range::DateRange;

/// Events with the padded range they are plotted against.
///
/// Built once; the event list never changes afterwards, so the range is
/// computed at construction and reused for every render.
#[derive(Debug, Clone)]
pub struct Timeline {
    events: Vec<Event>,
    range: DateRange,
}

impl Timeline {
    /// Build a timeline, failing on an empty list or a degenerate range.
    pub fn new(events: Vec<Event>, padding_months: u32) -> Result<Self, TimelineError> {
        let range = DateRange::from_events(&events, padding_months)?;
        Ok(Self { events, range })
    }

    /// All events, in the order they were given.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Get an event by index.
    pub fn get(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Always false; construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The padded visible range.
    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Percentage offset of a date within the range.
    pub fn position(&self, date: NaiveDate) -> f64 {
        self.range.position(date)
    }

    /// Markers for the given tier.
    pub fn markers(&self, tier: ZoomTier) -> Markers {
        Markers::new(self.range, tier)
    }

    /// Events paired with their index and percentage offset.
    pub fn event_positions(&self) -> impl Iterator<Item = (usize, &Event, f64)> + '_ {
        self.events
            .iter()
            .enumerate()
            .map(|(i, e)| (i, e, self.range.position(e.date)))
    }

    /// Indices of events sorted by date, earliest first.
    pub fn chronological(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.events.len()).collect();
        order.sort_by_key(|&i| self.events[i].date);
        order
    }
}
