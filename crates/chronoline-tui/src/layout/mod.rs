//! Page layout.
//!
//! This module provides:
//! - [`render_page`] - Whole-page renderer (title, timeline pane, footer)
//! - [`PageAreas`] - Region split for a terminal size

mod help;
mod shell;

pub use shell::{render_page, PageAreas};
