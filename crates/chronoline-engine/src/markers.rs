//! Axis marker generation.
//!
//! Markers are the tick marks under the axis. Their spacing and label format
//! depend on the zoom tier:
//!
//! | Tier  | Zoom             | Step      | Label  |
//! |-------|------------------|-----------|--------|
//! | Year  | `< 0.7`          | +1 year   | `2025` |
//! | Month | `0.7 ..< 1.5`    | +1 month  | `Sep`  |
//! | Day   | `>= 1.5`         | +7 days   | `15`   |

use std::fmt;
use std::iter::FusedIterator;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{add_days, add_months, add_years};
use crate::range::DateRange;

/// Zoom value at which the month tier starts.
const MONTH_TIER_FROM: f64 = 0.7;

/// Zoom value at which the day tier starts.
const DAY_TIER_FROM: f64 = 1.5;

/// Days between markers on the day tier.
const DAY_TIER_STEP_DAYS: u64 = 7;

/// Granularity of the axis markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomTier {
    /// One marker per year, labelled with the 4-digit year.
    Year,
    /// One marker per month, labelled with the abbreviated month name.
    Month,
    /// One marker per week, labelled with the day of the month.
    Day,
}

impl ZoomTier {
    /// Select the tier for a zoom value.
    pub fn for_zoom(zoom: f64) -> Self {
        if zoom < MONTH_TIER_FROM {
            Self::Year
        } else if zoom < DAY_TIER_FROM {
            Self::Month
        } else {
            Self::Day
        }
    }

    /// Advance a date by one step of this tier.
    pub fn advance(self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Year => add_years(date, 1),
            Self::Month => add_months(date, 1),
            Self::Day => add_days(date, DAY_TIER_STEP_DAYS),
        }
    }

    /// Format a marker label for this tier.
    pub fn label(self, date: NaiveDate) -> String {
        let format = match self {
            Self::Year => "%Y",
            Self::Month => "%b",
            Self::Day => "%-d",
        };
        date.format(format).to_string()
    }

    /// Human-readable tier name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
        }
    }
}

impl fmt::Display for ZoomTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single axis tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Marker {
    pub date: NaiveDate,
    pub label: String,
}

/// The marker sequence for a range and tier.
///
/// Cheap to copy; each call to [`Markers::iter`] starts again from `min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    range: DateRange,
    tier: ZoomTier,
}

impl Markers {
    /// Create the marker sequence for a range at the given tier.
    pub fn new(range: DateRange, tier: ZoomTier) -> Self {
        Self { range, tier }
    }

    /// Iterate markers from `min` up to and including `max`.
    pub fn iter(&self) -> MarkerIter {
        MarkerIter {
            current: Some(self.range.min()),
            max: self.range.max(),
            tier: self.tier,
        }
    }
}

impl IntoIterator for Markers {
    type Item = Marker;
    type IntoIter = MarkerIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Markers {
    type Item = Marker;
    type IntoIter = MarkerIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over markers.
#[derive(Debug, Clone)]
pub struct MarkerIter {
    current: Option<NaiveDate>,
    max: NaiveDate,
    tier: ZoomTier,
}

impl Iterator for MarkerIter {
    type Item = Marker;

    fn next(&mut self) -> Option<Self::Item> {
        let date = self.current.filter(|d| *d <= self.max)?;
        // Steps are strictly positive, so the sequence ends once past `max`
        self.current = self.tier.advance(date);
        Some(Marker {
            date,
            label: self.tier.label(date),
        })
    }
}

impl FusedIterator for MarkerIter {}
