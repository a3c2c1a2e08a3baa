//! chronoline-tui: Terminal UI for the chronoline timeline widget
//!
//! This crate provides the interactive layer, including:
//! - The timeline pane (axis, markers, events, hover detail panel)
//! - Page layout with title, footer hints and help overlay
//! - Key and mouse handling for zoom and hover

mod app;
mod event;
mod layout;
#[cfg(test)]
pub mod test_utils;
mod text;
pub mod theme;
pub mod timeline;
mod widgets;

pub use app::App;
pub use chronoline_engine;
pub use event::{key_to_action, Action};

use chronoline_engine::{sample_events, Config};
use crossterm::{
    cursor::Show as ShowCursor,
    event::{self as term_event, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, stdout};
use std::time::Duration;

/// RAII guard for terminal state restoration.
///
/// Created on mount; dropping it (normal exit, error or panic unwind) leaves
/// raw mode, the alternate screen and mouse capture.
struct TerminalGuard;

impl TerminalGuard {
    fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        tracing::debug!("Terminal acquired");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
        tracing::debug!("Terminal restored");
    }
}

/// Run the TUI with the built-in sample events.
///
/// This is the main entry point for the TUI. It builds the timeline, sets up
/// the terminal, runs the event loop, and restores the terminal on exit.
pub fn run_tui(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    // Build state before touching the terminal so errors print normally
    let mut app = App::new(config, sample_events())?;

    let _guard = TerminalGuard::acquire()?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let result = run_loop(&mut terminal, &mut app, tick_rate);

    terminal.show_cursor()?;
    tracing::info!("Timeline unmounted");

    result.map_err(Into::into)
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> io::Result<()> {
    loop {
        draw(terminal, app)?;

        if term_event::poll(tick_rate)? {
            match term_event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_action(key_to_action(key));
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(width, height) => app.handle_resize(width, height),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Measure the terminal and draw one frame.
fn draw<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let size = terminal.size()?;
    app.handle_resize(size.width, size.height);
    terminal.draw(|frame| {
        let area = frame.area();
        layout::render_page(app, area, frame.buffer_mut());
    })?;
    Ok(())
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
