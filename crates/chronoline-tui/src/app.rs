//! Application state and update logic for the chronoline TUI.

use chronoline_engine::{Config, Event, Timeline, TimelineError, ZoomLevel};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::event::Action;
use crate::layout::PageAreas;
use crate::theme::{BorderSet, IconMode, IconSet, Theme};
use crate::timeline::{inner_area, TimelineGeometry, TimelineState, ZoomButton};

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// Zoom, hover and width over the event list.
    pub timeline: TimelineState,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Set once the user asks to leave.
    pub should_quit: bool,

    pub page_title: String,
    pub widget_title: String,
    pub date_format: String,

    pub theme: Theme,
    pub icons: IconSet,
    pub borders: BorderSet,

    /// Terminal area from the last resize.
    area: Rect,
}

impl App {
    /// Create the app for a set of events.
    ///
    /// The config is expected to be validated already.
    pub fn new(config: &Config, events: Vec<Event>) -> Result<Self, TimelineError> {
        let timeline = Timeline::new(events, config.padding_months)?;
        let zoom = ZoomLevel::new(config.initial_zoom);
        let mode = IconMode::resolve(config.ascii);

        tracing::info!(
            events = timeline.len(),
            min = %timeline.range().min(),
            max = %timeline.range().max(),
            zoom = zoom.value(),
            "Timeline mounted"
        );

        Ok(Self {
            timeline: TimelineState::new(timeline, zoom),
            show_help: false,
            should_quit: false,
            page_title: config.page_title.clone(),
            widget_title: config.widget_title.clone(),
            date_format: config.date_format.clone(),
            theme: Theme::from_name(config.theme),
            icons: IconSet::new(mode),
            borders: BorderSet::new(mode),
            area: Rect::default(),
        })
    }

    /// Handle a key action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            Action::Help => {
                self.show_help = !self.show_help;
                return;
            }
            _ => {}
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return;
        }

        match action {
            Action::Back => {
                if !self.timeline.clear_hover() {
                    self.should_quit = true;
                }
            }
            Action::ZoomIn => {
                self.timeline.zoom_in();
            }
            Action::ZoomOut => {
                self.timeline.zoom_out();
            }
            Action::Prev => {
                self.timeline.hover_prev();
            }
            Action::Next => {
                self.timeline.hover_next();
            }
            Action::Quit | Action::Help | Action::None => {}
        }
    }

    /// Handle a mouse event against the last measured layout.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.show_help {
            return;
        }

        match mouse.kind {
            MouseEventKind::ScrollUp => {
                self.timeline.zoom_in();
            }
            MouseEventKind::ScrollDown => {
                self.timeline.zoom_out();
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(geo) = self.geometry() else {
                    return;
                };
                match geo.button_at(mouse.column, mouse.row) {
                    Some(ZoomButton::Out) => {
                        self.timeline.zoom_out();
                    }
                    Some(ZoomButton::In) => {
                        self.timeline.zoom_in();
                    }
                    None => {
                        let hit = geo.event_at(mouse.column, mouse.row);
                        self.timeline.hover(hit);
                    }
                }
            }
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let hit = self
                    .geometry()
                    .and_then(|geo| geo.event_at(mouse.column, mouse.row));
                self.timeline.hover(hit);
            }
            _ => {}
        }
    }

    /// Re-measure the layout for a new terminal size.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        let area = Rect::new(0, 0, width, height);
        if area != self.area {
            tracing::debug!(width, height, "Terminal resized");
            self.area = area;
        }
        let measured = PageAreas::new(area).map_or(0, |areas| inner_area(areas.timeline).width);
        self.timeline.set_width(measured);
    }

    /// Terminal area from the last resize.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Layout of the timeline pane for the current size and zoom.
    pub fn geometry(&self) -> Option<TimelineGeometry> {
        let areas = PageAreas::new(self.area)?;
        TimelineGeometry::compute(
            inner_area(areas.timeline),
            self.timeline.timeline(),
            self.timeline.zoom(),
        )
    }

    /// Footer status: the hovered event, or the event count and range.
    pub fn status_line(&self) -> String {
        if let Some(event) = self.timeline.hovered_event() {
            return format!(
                "{} · {}",
                event.name,
                event.formatted_date(&self.date_format)
            );
        }
        let timeline = self.timeline.timeline();
        let range = timeline.range();
        format!(
            "{} events · {} to {}",
            timeline.len(),
            range.min().format("%b %Y"),
            range.max().format("%b %Y")
        )
    }
}
