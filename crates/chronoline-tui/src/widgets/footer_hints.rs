//! Footer bar widget.
//!
//! Format: `5 events            [←/→] event │ [-/+] zoom │ [?] help │ [q] quit`
//!
//! The left side shows a short status (event count, or the hovered event);
//! the right side lists key hints, right-aligned.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::text::{display_width, truncate_to_width};
use crate::theme::Theme;

/// A single keybinding hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// The key or key combination (e.g., "?", "Ctrl+C").
    pub key: String,
    /// The action description (e.g., "help", "quit").
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint.
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Footer bar widget.
pub struct FooterHints<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
    status: Option<&'a str>,
}

impl<'a> FooterHints<'a> {
    /// Create a new footer widget.
    pub fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self {
            hints,
            theme,
            status: None,
        }
    }

    /// Set the status text shown on the left.
    #[must_use]
    pub fn status(mut self, status: &'a str) -> Self {
        self.status = Some(status);
        self
    }

    /// Hints for the timeline page.
    pub fn default_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("←/→", "event"),
            KeyHint::new("-/+", "zoom"),
            KeyHint::new("?", "help"),
            KeyHint::new("q", "quit"),
        ]
    }

    /// Hints while the help overlay is open.
    pub fn help_hints() -> Vec<KeyHint> {
        vec![KeyHint::new("Esc", "close"), KeyHint::new("q", "quit")]
    }
}

impl Widget for FooterHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut right_spans = Vec::new();
        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                right_spans.push(Span::styled(" │ ", Style::default().fg(self.theme.muted)));
            }
            right_spans.push(Span::styled("[", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(
                hint.key.as_str(),
                Style::default().fg(self.theme.primary),
            ));
            right_spans.push(Span::styled("] ", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(
                hint.action.as_str(),
                Style::default().fg(self.theme.subtext),
            ));
        }

        let total_width = usize::from(area.width);
        let right_width: usize = right_spans.iter().map(|s| display_width(&s.content)).sum();

        // Hints win; the status gets whatever is left
        let mut spans = Vec::new();
        let mut left_width = 0;
        if let Some(status) = self.status {
            let room = total_width.saturating_sub(right_width + 1);
            if room > 0 {
                let status = truncate_to_width(status, room);
                left_width = display_width(&status);
                spans.push(Span::styled(status, Style::default().fg(self.theme.subtext)));
            }
        }

        let padding = total_width.saturating_sub(left_width + right_width);
        if padding > 0 {
            spans.push(Span::raw(" ".repeat(padding)));
        }
        spans.extend(right_spans);

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(self.theme.surface))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    fn render(hints: &[KeyHint], status: Option<&str>, width: u16) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        let mut footer = FooterHints::new(hints, &theme);
        if let Some(status) = status {
            footer = footer.status(status);
        }
        footer.render(area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn test_hints_right_aligned() {
        let hints = vec![KeyHint::new("?", "help"), KeyHint::new("q", "quit")];
        insta::assert_snapshot!(render(&hints, Some("5 events"), 40), @"5 events             [?] help │ [q] quit");
    }

    #[test]
    fn test_status_truncated_before_hints() {
        let hints = vec![KeyHint::new("q", "quit")];
        let out = render(&hints, Some("Project Start · Jan 15, 2024"), 20);
        assert!(out.ends_with("[q] quit"));
        assert!(out.starts_with("Project St…"));
        assert!(out.contains('…'));
    }

    #[test]
    fn test_no_status() {
        let hints = FooterHints::help_hints();
        let out = render(&hints, None, 30);
        assert!(out.trim_start().starts_with("[Esc] close"));
    }

    #[test]
    fn test_default_hints() {
        let hints = FooterHints::default_hints();
        assert_eq!(hints.len(), 4);
        assert_eq!(hints[1], KeyHint::new("-/+", "zoom"));
    }
}
