//! Page layout with 3 regions.
//!
//! Regions:
//! 1. Page title (top, 1 line, followed by a blank line)
//! 2. Timeline pane (expands)
//! 3. Footer hints (bottom, 1 line)

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

use super::help::render_help_overlay;
use crate::app::App;
use crate::theme::Theme;
use crate::timeline::TimelineWidget;
use crate::widgets::FooterHints;

/// Minimum terminal width.
pub const MIN_WIDTH: u16 = 40;
/// Minimum terminal height.
pub const MIN_HEIGHT: u16 = 12;

/// Areas of the page for a given terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageAreas {
    pub title: Rect,
    pub timeline: Rect,
    pub footer: Rect,
}

impl PageAreas {
    /// Split the terminal area. Returns `None` below the minimum size.
    pub fn new(area: Rect) -> Option<Self> {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            return None;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Page title
                Constraint::Length(1), // Spacer
                Constraint::Min(0),    // Timeline pane (expands)
                Constraint::Length(1), // Footer hints
            ])
            .split(area);

        Some(Self {
            title: chunks[0],
            timeline: chunks[2],
            footer: chunks[3],
        })
    }
}

/// Render the whole page for the current app state.
pub fn render_page(app: &App, area: Rect, buf: &mut Buffer) {
    let Some(areas) = PageAreas::new(area) else {
        render_too_small(&app.theme, area, buf);
        return;
    };

    Paragraph::new(Line::styled(
        app.page_title.as_str(),
        Style::default()
            .fg(app.theme.text)
            .add_modifier(Modifier::BOLD),
    ))
    .render(areas.title, buf);

    TimelineWidget::new(&app.timeline, &app.theme, &app.icons, &app.borders)
        .title(&app.widget_title)
        .date_format(&app.date_format)
        .render(areas.timeline, buf);

    let hints = if app.show_help {
        FooterHints::help_hints()
    } else {
        FooterHints::default_hints()
    };
    let status = app.status_line();
    FooterHints::new(&hints, &app.theme)
        .status(&status)
        .render(areas.footer, buf);

    if app.show_help {
        render_help_overlay(&app.theme, &app.borders, area, buf);
    }
}

fn render_too_small(theme: &Theme, area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::styled(
            "Terminal too small",
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!(
                "Need {MIN_WIDTH}x{MIN_HEIGHT}, have {}x{}",
                area.width, area.height
            ),
            Style::default().fg(theme.muted),
        ),
    ];
    Paragraph::new(lines).render(area, buf);
}
