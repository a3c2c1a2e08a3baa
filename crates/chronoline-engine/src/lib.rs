//! chronoline-engine: Headless core for the chronoline timeline widget
//!
//! This crate provides everything the widget derives from its event list,
//! independent of any terminal:
//! - Static event data and calendar arithmetic
//! - Padded date range derivation and position mapping
//! - Zoom level and zoom tiers
//! - Axis marker generation
//! - Configuration

pub mod calendar;
pub mod config;
pub mod error;
pub mod event;
pub mod markers;
pub mod position;
pub mod range;
pub mod timeline;
pub mod zoom;

// Re-export commonly used types
pub use config::{Config, ConfigError, ThemeName, CONFIG_FILE_NAME};
pub use error::{TimelineError, ZoomError};
pub use event::{sample_events, Event, DEFAULT_DATE_FORMAT};
pub use markers::{Marker, MarkerIter, Markers, ZoomTier};
pub use position::column;
pub use range::{DateRange, DEFAULT_PADDING_MONTHS};
pub use timeline::Timeline;
pub use zoom::{ZoomLevel, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
