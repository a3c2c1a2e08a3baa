//! Timeline glyphs for Unicode and ASCII terminals.

/// Icon mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconMode {
    /// Standard Unicode box-drawing and geometric symbols.
    #[default]
    Unicode,
    /// ASCII-only fallback (maximum compatibility, also used with `NO_COLOR`).
    Ascii,
}

impl IconMode {
    /// Pick the mode from config and environment, respecting `NO_COLOR`.
    pub fn resolve(force_ascii: bool) -> Self {
        if force_ascii || std::env::var_os("NO_COLOR").is_some() {
            Self::Ascii
        } else {
            Self::Unicode
        }
    }
}

/// Glyphs used to draw the timeline.
#[derive(Debug, Clone)]
pub struct IconSet {
    mode: IconMode,
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconMode::default())
    }
}

impl IconSet {
    /// Create a new icon set with the specified mode.
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Get the current icon mode.
    pub fn mode(&self) -> IconMode {
        self.mode
    }

    // === Events ===

    pub fn event_dot(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "●",
            IconMode::Ascii => "o",
        }
    }

    pub fn event_dot_hovered(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "◉",
            IconMode::Ascii => "@",
        }
    }

    pub fn connector(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "│",
            IconMode::Ascii => "|",
        }
    }

    // === Axis ===

    pub fn axis(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "─",
            IconMode::Ascii => "-",
        }
    }

    pub fn marker_tick(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "┼",
            IconMode::Ascii => "+",
        }
    }

    pub fn axis_event(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "┴",
            IconMode::Ascii => "+",
        }
    }
}
