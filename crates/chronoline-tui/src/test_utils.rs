//! Test utilities for chronoline-tui rendering tests.
//!
//! Helpers for creating test terminals and apps, and converting buffers to
//! strings for snapshot comparison.

use crate::app::App;
use crate::layout::render_page;
use chronoline_engine::{sample_events, Config};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 80;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 24;

/// Create a test terminal with custom dimensions.
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// ASCII config so rendered output does not depend on `NO_COLOR`.
pub fn test_config() -> Config {
    Config {
        ascii: true,
        ..Config::default()
    }
}

/// Create a test app with the sample events, not yet sized.
pub fn create_test_app() -> App {
    App::new(&test_config(), sample_events()).expect("sample events form a valid timeline")
}

/// Create a test app measured for a terminal size.
pub fn create_test_app_sized(width: u16, height: u16) -> App {
    let mut app = create_test_app();
    app.handle_resize(width, height);
    app
}

/// Convert a buffer to a string representation for snapshot testing.
///
/// Trailing whitespace is trimmed from each line.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    if result.ends_with('\n') {
        result.pop();
    }

    result
}

/// Render the page for an app and return it as a string.
pub fn render_app_to_string(app: &App, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    render_page(app, area, &mut buffer);
    buffer_to_string(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_terminal() {
        let terminal = create_test_terminal_sized(TEST_WIDTH, TEST_HEIGHT);
        let size = terminal.size().unwrap();
        assert_eq!(size.width, TEST_WIDTH);
        assert_eq!(size.height, TEST_HEIGHT);
    }

    #[test]
    fn test_create_test_app() {
        let app = create_test_app();
        assert_eq!(app.timeline.timeline().len(), 5);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_buffer_to_string() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", ratatui::style::Style::default());
        buffer.set_string(0, 1, "World", ratatui::style::Style::default());

        assert_eq!(buffer_to_string(&buffer), "Hello\nWorld\n");
    }
}
