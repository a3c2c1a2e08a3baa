//! Cell layout of the timeline pane.
//!
//! Rows inside the widget border, top to bottom:
//!
//! ```text
//! 0  [-] [+]  Zoom 1.0x  Month
//! 1            Phase 1                 <- secondary name row
//! 2    Project Start      Milestone    <- primary name row
//! 3        ●      ●           ●        <- event dots
//! 4        │      │           │        <- connectors
//! 5  ──┼───┴──────┴──┼────────┴──┼──   <- axis with marker ticks
//! 6   Nov           Dec         Jan    <- marker labels
//! 7+ detail panel
//! ```
//!
//! The same geometry drives rendering and mouse hit-testing, so a click or
//! hover always resolves against exactly what was drawn.

use chronoline_engine::{column, Timeline, ZoomLevel};
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use crate::text::truncate_to_width;

/// Smallest inner width the timeline can be drawn in.
pub const MIN_INNER_WIDTH: u16 = 20;
/// Smallest inner height the timeline can be drawn in.
pub const MIN_INNER_HEIGHT: u16 = 7;

/// Empty columns between the border and either end of the axis.
const TRACK_MARGIN: u16 = 2;
/// Longest event name drawn above the axis.
const MAX_NAME_WIDTH: usize = 18;

pub(crate) const HEADER_ROW: u16 = 0;
/// Name rows, in order of preference.
pub(crate) const NAME_ROWS: [u16; 2] = [2, 1];
pub(crate) const DOT_ROW: u16 = 3;
pub(crate) const CONNECTOR_ROW: u16 = 4;
pub(crate) const AXIS_ROW: u16 = 5;
pub(crate) const LABEL_ROW: u16 = 6;
/// First row a detail panel may start on.
const PANEL_ROW: u16 = 8;

/// Text placed at a fixed cell position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSpan {
    pub x: u16,
    pub y: u16,
    pub text: String,
    pub width: u16,
}

impl LabelSpan {
    fn end(&self) -> u16 {
        self.x + self.width
    }

    /// Check whether a cell lies inside the span.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        y == self.y && x >= self.x && x < self.end()
    }
}

/// Where an event is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSlot {
    /// Index into the timeline's event list.
    pub index: usize,
    /// Absolute column of the dot and connector.
    pub x: u16,
    /// Name label, if it fit without overlapping another.
    pub name: Option<LabelSpan>,
}

/// Where a marker is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSlot {
    /// Absolute column of the tick.
    pub x: u16,
    /// Label, if it fit without overlapping the previous one.
    pub label: Option<LabelSpan>,
}

/// The two zoom controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomButton {
    Out,
    In,
}

impl ZoomButton {
    /// Button face.
    pub fn label(self) -> &'static str {
        match self {
            Self::Out => "[-]",
            Self::In => "[+]",
        }
    }
}

/// Computed cell layout for one render.
#[derive(Debug, Clone)]
pub struct TimelineGeometry {
    /// Area inside the widget border.
    pub inner: Rect,
    /// Horizontal span of the axis (one row high, on the axis row).
    pub track: Rect,
    pub zoom_out: Rect,
    pub zoom_in: Rect,
    pub events: Vec<EventSlot>,
    pub markers: Vec<MarkerSlot>,
}

impl TimelineGeometry {
    /// Lay out the timeline inside `inner`.
    ///
    /// Returns `None` when the area is smaller than
    /// [`MIN_INNER_WIDTH`] x [`MIN_INNER_HEIGHT`].
    pub fn compute(inner: Rect, timeline: &Timeline, zoom: ZoomLevel) -> Option<Self> {
        if inner.width < MIN_INNER_WIDTH || inner.height < MIN_INNER_HEIGHT {
            return None;
        }

        let track = Rect::new(
            inner.x + TRACK_MARGIN,
            inner.y + AXIS_ROW,
            inner.width - 2 * TRACK_MARGIN,
            1,
        );
        let zoom_out = Rect::new(inner.x, inner.y + HEADER_ROW, 3, 1);
        let zoom_in = Rect::new(inner.x + 4, inner.y + HEADER_ROW, 3, 1);

        let events = Self::layout_events(inner, track, timeline);
        let markers = Self::layout_markers(inner, track, timeline, zoom);

        Some(Self {
            inner,
            track,
            zoom_out,
            zoom_in,
            events,
            markers,
        })
    }

    fn layout_events(inner: Rect, track: Rect, timeline: &Timeline) -> Vec<EventSlot> {
        let mut row_ends: [Option<u16>; NAME_ROWS.len()] = [None; NAME_ROWS.len()];
        let mut slots = Vec::with_capacity(timeline.len());

        // Left to right, so overlap only needs checking against the last label per row
        for index in timeline.chronological() {
            let Some(event) = timeline.get(index) else {
                continue;
            };
            let Some(offset) = column(timeline.position(event.date), track.width) else {
                continue;
            };
            let x = track.x + offset;

            let text = truncate_to_width(&event.name, MAX_NAME_WIDTH.min(usize::from(inner.width)));
            let name = NAME_ROWS
                .iter()
                .zip(row_ends.iter_mut())
                .find_map(|(&row, end)| {
                    let span = centered_span(inner, x, inner.y + row, &text);
                    let free = end.is_none_or(|e| span.x > e);
                    if free {
                        *end = Some(span.end());
                        Some(span)
                    } else {
                        None
                    }
                });

            slots.push(EventSlot { index, x, name });
        }

        slots
    }

    fn layout_markers(
        inner: Rect,
        track: Rect,
        timeline: &Timeline,
        zoom: ZoomLevel,
    ) -> Vec<MarkerSlot> {
        let mut last_end: Option<u16> = None;

        timeline
            .markers(zoom.tier())
            .iter()
            .filter_map(|marker| {
                let offset = column(timeline.position(marker.date), track.width)?;
                let x = track.x + offset;

                let span = centered_span(inner, x, inner.y + LABEL_ROW, &marker.label);
                let label = if last_end.is_none_or(|e| span.x > e) {
                    last_end = Some(span.end());
                    Some(span)
                } else {
                    None
                };

                Some(MarkerSlot { x, label })
            })
            .collect()
    }

    /// Width of the axis in cells.
    pub fn track_width(&self) -> u16 {
        self.track.width
    }

    /// Absolute row of a layout row.
    pub fn row(&self, row: u16) -> u16 {
        self.inner.y + row
    }

    /// Event under a cell: its dot, connector, or name label.
    pub fn event_at(&self, x: u16, y: u16) -> Option<usize> {
        let dot_rows = [self.row(DOT_ROW), self.row(CONNECTOR_ROW)];
        if dot_rows.contains(&y) {
            return self.events.iter().find(|s| s.x == x).map(|s| s.index);
        }
        self.events
            .iter()
            .find(|s| s.name.as_ref().is_some_and(|n| n.contains(x, y)))
            .map(|s| s.index)
    }

    /// Zoom control under a cell.
    pub fn button_at(&self, x: u16, y: u16) -> Option<ZoomButton> {
        let hit = |r: Rect| y == r.y && x >= r.x && x < r.x + r.width;
        if hit(self.zoom_out) {
            Some(ZoomButton::Out)
        } else if hit(self.zoom_in) {
            Some(ZoomButton::In)
        } else {
            None
        }
    }

    /// Slot for an event index.
    pub fn slot(&self, index: usize) -> Option<&EventSlot> {
        self.events.iter().find(|s| s.index == index)
    }

    /// Place a `width` x `height` panel under (or, if it won't fit, over)
    /// the event at column `x`.
    pub fn panel_rect(&self, x: u16, width: u16, height: u16) -> Rect {
        let width = width.min(self.inner.width);
        let height = height.min(self.inner.height);

        let left = x
            .saturating_sub(width / 2)
            .clamp(self.inner.x, self.inner.right() - width);

        let below = self.row(PANEL_ROW);
        let top = if below + height <= self.inner.bottom() {
            below
        } else {
            self.inner.bottom() - height
        };

        Rect::new(left, top, width, height)
    }
}

/// Center `text` on column `x`, kept inside `inner`.
#[allow(clippy::cast_possible_truncation)]
fn centered_span(inner: Rect, x: u16, y: u16, text: &str) -> LabelSpan {
    let width = (text.width() as u16).min(inner.width);
    let start = x
        .saturating_sub(width / 2)
        .clamp(inner.x, inner.right() - width);
    LabelSpan {
        x: start,
        y,
        text: text.to_string(),
        width,
    }
}
