//! Help overlay.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::theme::{BorderSet, Theme};

const HELP_WIDTH: u16 = 44;

/// Key bindings listed in the overlay.
const BINDINGS: &[(&str, &str)] = &[
    ("- / +", "Zoom out / in"),
    ("Left / Right", "Previous / next event"),
    ("h / l", "Previous / next event"),
    ("Mouse", "Hover events, click [-] [+]"),
    ("Scroll", "Zoom"),
    ("Esc", "Clear hover, then quit"),
    ("q / Ctrl+C", "Quit"),
    ("?", "Toggle this help"),
];

/// Create a centered rect with fixed dimensions.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render the help overlay centered in `area`.
#[allow(clippy::cast_possible_truncation)]
pub fn render_help_overlay(theme: &Theme, borders: &BorderSet, area: Rect, buf: &mut Buffer) {
    let height = BINDINGS.len() as u16 + 2;
    let overlay = centered_fixed(HELP_WIDTH, height, area);

    Clear.render(overlay, buf);

    let block = Block::default()
        .title(Line::styled(
            " Help ",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_set(borders.popup())
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.surface));

    let lines: Vec<Line<'_>> = BINDINGS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!(" {key:<13}"), Style::default().fg(theme.primary)),
                Span::styled(*action, Style::default().fg(theme.text)),
            ])
        })
        .collect();

    Paragraph::new(lines).block(block).render(overlay, buf);
}
