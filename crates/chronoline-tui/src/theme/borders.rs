//! Border sets for Unicode and ASCII fallback.

use ratatui::symbols::border;

use super::icons::IconMode;

/// Plain ASCII box for widget borders.
const ASCII_PLAIN: border::Set = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
};

/// ASCII box with `=` edges for popups.
const ASCII_POPUP: border::Set = border::Set {
    horizontal_top: "=",
    horizontal_bottom: "=",
    ..ASCII_PLAIN
};

/// Border set based on icon mode (supports `NO_COLOR`/ASCII fallback).
#[derive(Debug, Clone)]
pub struct BorderSet {
    mode: IconMode,
}

impl Default for BorderSet {
    fn default() -> Self {
        Self::new(IconMode::default())
    }
}

impl BorderSet {
    /// Create a new border set with the specified mode.
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Get the current mode.
    pub fn mode(&self) -> IconMode {
        self.mode
    }

    /// Widget borders: rounded for Unicode, `+-|` for ASCII.
    pub fn normal(&self) -> border::Set {
        match self.mode {
            IconMode::Unicode => border::ROUNDED,
            IconMode::Ascii => ASCII_PLAIN,
        }
    }

    /// Popup borders (detail panel, help): thick for Unicode, `+=|` for ASCII.
    pub fn popup(&self) -> border::Set {
        match self.mode {
            IconMode::Unicode => border::THICK,
            IconMode::Ascii => ASCII_POPUP,
        }
    }
}
