//! Timeline pane.
//!
//! This module provides:
//! - [`TimelineState`] - Zoom, hover and measured width over a fixed timeline
//! - [`TimelineGeometry`] - Cell layout shared by rendering and hit-testing
//! - [`TimelineWidget`] - Widget for rendering the pane
//! - [`DetailPanel`] - Popup with the hovered event's details

mod detail;
mod geometry;
mod state;
mod widget;

pub use detail::DetailPanel;
pub use geometry::{
    EventSlot, LabelSpan, MarkerSlot, TimelineGeometry, ZoomButton, MIN_INNER_HEIGHT,
    MIN_INNER_WIDTH,
};
pub use state::TimelineState;
pub use widget::{inner_area, TimelineWidget};
