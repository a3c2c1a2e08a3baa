//! Catppuccin-based color palettes for the timeline.

use chronoline_engine::ThemeName;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub surface: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Accents
    pub primary: Color,

    // Timeline elements
    pub event: Color,
    pub event_hovered: Color,
    pub marker: Color,
    pub axis: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

impl Theme {
    /// Build the palette for a configured theme name.
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Mocha => Self::mocha(),
            ThemeName::Latte => Self::latte(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }

    /// Catppuccin Mocha theme (default dark theme).
    pub fn mocha() -> Self {
        Self {
            surface: Color::Rgb(49, 50, 68), // #313244

            text: Color::Rgb(205, 214, 244),    // #cdd6f4
            subtext: Color::Rgb(166, 173, 200), // #a6adc8
            muted: Color::Rgb(108, 112, 134),   // #6c7086

            primary: Color::Rgb(180, 190, 254), // #b4befe (lavender)

            event: Color::Rgb(137, 180, 250),         // #89b4fa (blue)
            event_hovered: Color::Rgb(116, 199, 236), // #74c7ec (sapphire)
            marker: Color::Rgb(166, 173, 200),        // #a6adc8
            axis: Color::Rgb(88, 91, 112),            // #585b70

            border: Color::Rgb(69, 71, 90),            // #45475a
            border_focused: Color::Rgb(180, 190, 254), // #b4befe (lavender)
        }
    }

    /// Catppuccin Latte theme (light theme).
    pub fn latte() -> Self {
        Self {
            surface: Color::Rgb(230, 233, 239), // #e6e9ef

            text: Color::Rgb(76, 79, 105),    // #4c4f69
            subtext: Color::Rgb(92, 95, 119), // #5c5f77
            muted: Color::Rgb(140, 143, 161), // #8c8fa1

            primary: Color::Rgb(114, 135, 253), // #7287fd (lavender)

            event: Color::Rgb(30, 102, 245),        // #1e66f5 (blue)
            event_hovered: Color::Rgb(32, 159, 181), // #209fb5 (sapphire)
            marker: Color::Rgb(92, 95, 119),        // #5c5f77
            axis: Color::Rgb(172, 176, 190),        // #acb0be

            border: Color::Rgb(188, 192, 204),        // #bcc0cc
            border_focused: Color::Rgb(114, 135, 253), // #7287fd (lavender)
        }
    }

    /// High contrast theme for accessibility.
    pub fn high_contrast() -> Self {
        Self {
            surface: Color::Rgb(20, 20, 20),

            text: Color::White,
            subtext: Color::Rgb(200, 200, 200),
            muted: Color::Rgb(150, 150, 150),

            primary: Color::Cyan,

            event: Color::LightBlue,
            event_hovered: Color::Yellow,
            marker: Color::White,
            axis: Color::White,

            border: Color::White,
            border_focused: Color::Cyan,
        }
    }
}
