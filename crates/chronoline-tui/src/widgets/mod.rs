//! Shared widgets.
//!
//! - [`FooterHints`] - Bottom status and keybinding hints

mod footer_hints;

pub use footer_hints::FooterHints;
