//! Errors raised while building a timeline.

use chrono::NaiveDate;
use thiserror::Error;

/// Error type for timeline construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimelineError {
    #[error("Timeline has no events")]
    NoEvents,

    #[error("Date range is empty: {min} .. {max}")]
    DegenerateRange { min: NaiveDate, max: NaiveDate },

    #[error("Date arithmetic overflowed near {0}")]
    DateOverflow(NaiveDate),
}

/// Error type for zoom values given from outside (config, command line).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ZoomError {
    #[error("zoom must be between {min} and {max}, got {value}")]
    OutOfRange { value: f64, min: f64, max: f64 },

    #[error("zoom must be a multiple of {step}, got {value}")]
    OffStep { value: f64, step: f64 },
}
