//! Timeline pane state.
//!
//! Owns the zoom level, the hovered event and the last measured width. The
//! event list itself is fixed; only these three values change at runtime.

use chronoline_engine::{Event, Timeline, ZoomLevel};

/// Mutable view state over a fixed [`Timeline`].
#[derive(Debug, Clone)]
pub struct TimelineState {
    timeline: Timeline,
    zoom: ZoomLevel,
    /// Index into the timeline's events.
    hovered: Option<usize>,
    /// Inner width of the pane at the last render, in cells.
    width: u16,
}

impl TimelineState {
    /// Create state for a timeline at the given zoom.
    pub fn new(timeline: Timeline, zoom: ZoomLevel) -> Self {
        Self {
            timeline,
            zoom,
            hovered: None,
            width: 0,
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// The hovered event, if any.
    pub fn hovered_event(&self) -> Option<&Event> {
        self.hovered.and_then(|i| self.timeline.get(i))
    }

    /// Last measured inner width.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Step zoom in. Returns true if the level changed.
    pub fn zoom_in(&mut self) -> bool {
        let changed = self.zoom.increase();
        if changed {
            tracing::debug!(zoom = self.zoom.value(), tier = %self.zoom.tier(), "Zoomed in");
        }
        changed
    }

    /// Step zoom out. Returns true if the level changed.
    pub fn zoom_out(&mut self) -> bool {
        let changed = self.zoom.decrease();
        if changed {
            tracing::debug!(zoom = self.zoom.value(), tier = %self.zoom.tier(), "Zoomed out");
        }
        changed
    }

    /// Set or clear the hovered event. Out-of-range indices clear it.
    ///
    /// Returns true if the hover changed.
    pub fn hover(&mut self, index: Option<usize>) -> bool {
        let index = index.filter(|&i| i < self.timeline.len());
        if index == self.hovered {
            return false;
        }
        self.hovered = index;
        tracing::debug!(hovered = ?index, "Hover changed");
        true
    }

    /// Clear the hover. Returns true if something was hovered.
    pub fn clear_hover(&mut self) -> bool {
        self.hover(None)
    }

    /// Move the hover to the next event by date. Stops at the last event.
    pub fn hover_next(&mut self) -> bool {
        let order = self.timeline.chronological();
        let next = match self.hovered.and_then(|h| order.iter().position(|&i| i == h)) {
            Some(pos) => order.get(pos + 1).or(order.last()),
            None => order.first(),
        };
        self.hover(next.copied())
    }

    /// Move the hover to the previous event by date. Stops at the first event.
    pub fn hover_prev(&mut self) -> bool {
        let order = self.timeline.chronological();
        let prev = match self.hovered.and_then(|h| order.iter().position(|&i| i == h)) {
            Some(pos) => order.get(pos.saturating_sub(1)),
            None => order.last(),
        };
        self.hover(prev.copied())
    }

    /// Record the measured inner width. Returns true if it changed.
    pub fn set_width(&mut self, width: u16) -> bool {
        if width == self.width {
            return false;
        }
        tracing::debug!(from = self.width, to = width, "Timeline width measured");
        self.width = width;
        true
    }
}
