//! Timeline pane widget.

use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::detail::DetailPanel;
use super::geometry::{
    TimelineGeometry, ZoomButton, AXIS_ROW, CONNECTOR_ROW, DOT_ROW, HEADER_ROW, LABEL_ROW,
};
use super::state::TimelineState;
use crate::text::truncate_to_width;
use crate::theme::{BorderSet, IconSet, Theme};

/// Columns between the start of the header and the zoom status text.
const STATUS_OFFSET: u16 = 9;

/// Area inside the pane border.
pub fn inner_area(area: Rect) -> Rect {
    area.inner(Margin::new(1, 1))
}

/// Renders the axis, markers, events and the hover panel.
pub struct TimelineWidget<'a> {
    state: &'a TimelineState,
    theme: &'a Theme,
    icons: &'a IconSet,
    borders: &'a BorderSet,
    title: &'a str,
    date_format: &'a str,
}

impl<'a> TimelineWidget<'a> {
    pub fn new(
        state: &'a TimelineState,
        theme: &'a Theme,
        icons: &'a IconSet,
        borders: &'a BorderSet,
    ) -> Self {
        Self {
            state,
            theme,
            icons,
            borders,
            title: "",
            date_format: chronoline_engine::DEFAULT_DATE_FORMAT,
        }
    }

    /// Set the title shown on the top border.
    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// Set the strftime pattern used in the detail panel.
    #[must_use]
    pub fn date_format(mut self, format: &'a str) -> Self {
        self.date_format = format;
        self
    }

    fn render_header(&self, geo: &TimelineGeometry, buf: &mut Buffer) {
        let zoom = self.state.zoom();
        for (button, rect, enabled) in [
            (ZoomButton::Out, geo.zoom_out, !zoom.is_min()),
            (ZoomButton::In, geo.zoom_in, !zoom.is_max()),
        ] {
            let style = if enabled {
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.muted)
            };
            buf.set_string(rect.x, rect.y, button.label(), style);
        }

        let x = geo.inner.x + STATUS_OFFSET;
        let room = geo.inner.right().saturating_sub(x);
        let status = format!("Zoom {:.1}x  {}", zoom.value(), zoom.tier());
        buf.set_string(
            x,
            geo.row(HEADER_ROW),
            truncate_to_width(&status, usize::from(room)),
            Style::default().fg(self.theme.subtext),
        );
    }

    fn render_axis(&self, geo: &TimelineGeometry, buf: &mut Buffer) {
        let y = geo.row(AXIS_ROW);
        let axis = Style::default().fg(self.theme.axis);
        for x in geo.track.x..geo.track.right() {
            set_cell(buf, x, y, self.icons.axis(), axis);
        }

        let marker = Style::default().fg(self.theme.marker);
        for slot in &geo.markers {
            set_cell(buf, slot.x, y, self.icons.marker_tick(), axis);
            if let Some(label) = &slot.label {
                buf.set_string(label.x, geo.row(LABEL_ROW), &label.text, marker);
            }
        }
    }

    fn render_events(&self, geo: &TimelineGeometry, buf: &mut Buffer) {
        let hovered = self.state.hovered();

        for slot in &geo.events {
            let is_hovered = hovered == Some(slot.index);
            let (dot, color) = if is_hovered {
                (self.icons.event_dot_hovered(), self.theme.event_hovered)
            } else {
                (self.icons.event_dot(), self.theme.event)
            };
            let style = Style::default().fg(color);

            set_cell(buf, slot.x, geo.row(DOT_ROW), dot, style);
            set_cell(buf, slot.x, geo.row(CONNECTOR_ROW), self.icons.connector(), style);
            set_cell(buf, slot.x, geo.row(AXIS_ROW), self.icons.axis_event(), style);

            if let Some(name) = &slot.name {
                let name_style = if is_hovered {
                    Style::default()
                        .fg(self.theme.event_hovered)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(self.theme.text)
                };
                buf.set_string(name.x, name.y, &name.text, name_style);
            }
        }
    }

    fn render_detail(&self, geo: &TimelineGeometry, buf: &mut Buffer) {
        let Some(index) = self.state.hovered() else {
            return;
        };
        let (Some(event), Some(slot)) = (self.state.timeline().get(index), geo.slot(index)) else {
            return;
        };

        let panel = DetailPanel::new(event, self.date_format, self.theme, self.borders);
        let width = panel.width(geo.inner.width);
        let height = panel.height(width);
        let rect = geo.panel_rect(slot.x, width, height);
        panel.render(rect, buf);
    }
}

impl Widget for TimelineWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(self.borders.normal())
            .border_style(Style::default().fg(self.theme.border))
            .title(Line::styled(
                format!(" {} ", self.title),
                Style::default().fg(self.theme.primary),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(geo) =
            TimelineGeometry::compute(inner, self.state.timeline(), self.state.zoom())
        else {
            Paragraph::new(Line::styled(
                "Too narrow for the timeline",
                Style::default().fg(self.theme.muted),
            ))
            .render(inner, buf);
            return;
        };

        self.render_header(&geo, buf);
        self.render_axis(&geo, buf);
        self.render_events(&geo, buf);
        self.render_detail(&geo, buf);
    }
}

fn set_cell(buf: &mut Buffer, x: u16, y: u16, symbol: &str, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol(symbol).set_style(style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use crate::theme::IconMode;
    use chrono::NaiveDate;
    use chronoline_engine::{Event, Timeline, ZoomLevel, DEFAULT_PADDING_MONTHS};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn fixture_state(zoom: f64) -> TimelineState {
        let timeline = Timeline::new(
            vec![
                Event::new(d(2024, 11, 15), "Kickoff", "Project starts"),
                Event::new(d(2025, 3, 1), "Beta", "Beta release"),
                Event::new(d(2025, 6, 15), "Launch", "General availability"),
            ],
            DEFAULT_PADDING_MONTHS,
        )
        .unwrap();
        TimelineState::new(timeline, ZoomLevel::new(zoom))
    }

    fn render(state: &TimelineState, mode: IconMode, width: u16, height: u16) -> Buffer {
        let theme = Theme::default();
        let icons = IconSet::new(mode);
        let borders = BorderSet::new(mode);
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        TimelineWidget::new(state, &theme, &icons, &borders)
            .title("Project Timeline")
            .render(area, &mut buf);
        buf
    }

    #[test]
    fn test_inner_area() {
        assert_eq!(inner_area(Rect::new(0, 2, 80, 20)), Rect::new(1, 3, 78, 18));
    }

    #[test]
    fn test_render_year_tier_ascii() {
        let state = fixture_state(0.5);
        let buf = render(&state, IconMode::Ascii, 44, 9);

        insta::assert_snapshot!(buffer_to_string(&buf), @r"
        + Project Timeline ------------------------+
        |[-] [+]  Zoom 0.5x  Year                  |
        |                                          |
        |      Kickoff      Beta      Launch       |
        |         o           o          o         |
        |         |           |          |         |
        |  +------+-----------+----------+-------  |
        |2024                                      |
        +------------------------------------------+
        ");
    }

    #[test]
    fn test_render_unicode_glyphs() {
        let state = fixture_state(1.0);
        let buf = render(&state, IconMode::Unicode, 44, 9);

        assert_eq!(buf[(10, 4)].symbol(), "●");
        assert_eq!(buf[(10, 5)].symbol(), "│");
        assert_eq!(buf[(10, 6)].symbol(), "┴");
        // First month marker sits on the track origin
        assert_eq!(buf[(3, 6)].symbol(), "┼");
        assert_eq!(buf[(0, 0)].symbol(), "╭");
    }

    #[test]
    fn test_month_labels_and_status() {
        let state = fixture_state(1.0);
        let text = buffer_to_string(&render(&state, IconMode::Ascii, 44, 9));
        assert!(text.contains("Zoom 1.0x  Month"));
        assert!(text.lines().nth(7).unwrap().contains("Sep"));
    }

    #[test]
    fn test_hovered_event_uses_hover_glyph_and_panel() {
        let mut state = fixture_state(1.0);
        state.hover(Some(1));
        let buf = render(&state, IconMode::Unicode, 60, 16);
        let text = buffer_to_string(&buf);

        // Inner is 58 wide: track x=3..57, Beta at the midpoint column
        assert_eq!(buf[(30, 4)].symbol(), "◉");
        assert!(text.contains("Beta release"));
        assert!(text.contains("Mar 1, 2025"));
    }

    #[test]
    fn test_no_panel_without_hover() {
        let state = fixture_state(1.0);
        let text = buffer_to_string(&render(&state, IconMode::Unicode, 60, 16));
        assert!(!text.contains("Beta release"));
    }

    #[test]
    fn test_disabled_buttons_are_muted() {
        let theme = Theme::default();
        let state = fixture_state(2.0);
        let buf = render(&state, IconMode::Ascii, 44, 9);
        assert_eq!(buf[(5, 1)].fg, theme.muted);
        assert_eq!(buf[(1, 1)].fg, theme.primary);
    }

    #[test]
    fn test_too_narrow_message() {
        let state = fixture_state(1.0);
        let text = buffer_to_string(&render(&state, IconMode::Ascii, 20, 9));
        assert!(text.contains("Too narrow"));
        assert!(!text.contains("[-]"));
    }
}
