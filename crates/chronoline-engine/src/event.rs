//! Timeline events.
//!
//! Events are the dated items plotted on the axis. The widget ships with a
//! fixed list ([`sample_events`]); there is no creation or deletion at runtime.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default display format for event dates in the detail panel.
pub const DEFAULT_DATE_FORMAT: &str = "%b %-d, %Y";

/// A single dated item on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Calendar date the event happened on.
    pub date: NaiveDate,
    /// Short label shown next to the dot.
    pub name: String,
    /// Free-text description shown in the detail panel.
    pub details: String,
}

impl Event {
    /// Create a new event.
    pub fn new(date: NaiveDate, name: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
            details: details.into(),
        }
    }

    /// Format the event date with a strftime pattern.
    ///
    /// The pattern must already be validated (see [`crate::Config::validate`]).
    pub fn formatted_date(&self, format: &str) -> String {
        self.date.format(format).to_string()
    }
}

/// The built-in project timeline.
pub fn sample_events() -> Vec<Event> {
    [
        ((2024, 1, 15), "Project Start", "Kickoff meeting"),
        ((2024, 2, 1), "Phase 1", "Requirements gathering"),
        ((2024, 3, 15), "Milestone", "Design approval"),
        ((2024, 4, 1), "Phase 2", "Development begins"),
        ((2024, 5, 15), "Review", "Client presentation"),
    ]
    .into_iter()
    .filter_map(|((y, m, d), name, details)| {
        NaiveDate::from_ymd_opt(y, m, d).map(|date| Event::new(date, name, details))
    })
    .collect()
}
