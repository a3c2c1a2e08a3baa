//! Hover detail panel.

use chronoline_engine::Event;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Widget},
};

use crate::text::{display_width, truncate_to_width, wrap_text};
use crate::theme::{BorderSet, Theme};

const MIN_PANEL_WIDTH: u16 = 20;
const MAX_PANEL_WIDTH: u16 = 40;
/// Border plus one cell of padding on each side.
const CHROME_WIDTH: u16 = 4;
/// Border rows plus the name and date lines.
const FIXED_HEIGHT: u16 = 4;

/// Bordered panel with an event's name, date and details.
pub struct DetailPanel<'a> {
    event: &'a Event,
    date_format: &'a str,
    theme: &'a Theme,
    borders: &'a BorderSet,
}

impl<'a> DetailPanel<'a> {
    pub fn new(
        event: &'a Event,
        date_format: &'a str,
        theme: &'a Theme,
        borders: &'a BorderSet,
    ) -> Self {
        Self {
            event,
            date_format,
            theme,
            borders,
        }
    }

    /// Panel width for an area at most `available` cells wide.
    #[allow(clippy::cast_possible_truncation)]
    pub fn width(&self, available: u16) -> u16 {
        let date = self.event.formatted_date(self.date_format);
        let content = [
            display_width(&self.event.name),
            display_width(&date),
            display_width(&self.event.details),
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
        .min(usize::from(MAX_PANEL_WIDTH)) as u16;

        (content + CHROME_WIDTH)
            .clamp(MIN_PANEL_WIDTH, MAX_PANEL_WIDTH)
            .min(available)
    }

    /// Panel height once details are wrapped to fit `width`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn height(&self, width: u16) -> u16 {
        let lines = self.detail_lines(width).len();
        FIXED_HEIGHT + lines as u16
    }

    fn detail_lines(&self, width: u16) -> Vec<String> {
        if self.event.details.is_empty() {
            return Vec::new();
        }
        wrap_text(
            &self.event.details,
            usize::from(width.saturating_sub(CHROME_WIDTH)),
        )
    }
}

impl Widget for DetailPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < CHROME_WIDTH || area.height < 3 {
            return;
        }
        let text_width = usize::from(area.width - CHROME_WIDTH);

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(self.borders.popup())
            .border_style(Style::default().fg(self.theme.border_focused))
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(self.theme.surface));

        let mut lines = vec![
            Line::styled(
                truncate_to_width(&self.event.name, text_width),
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                self.event.formatted_date(self.date_format),
                Style::default().fg(self.theme.subtext),
            ),
        ];
        lines.extend(
            self.detail_lines(area.width)
                .into_iter()
                .map(|l| Line::styled(l, Style::default().fg(self.theme.text))),
        );

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
