//! Configuration for the chronoline widget.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! gives the stock widget.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::event::DEFAULT_DATE_FORMAT;
use crate::range::DEFAULT_PADDING_MONTHS;
use crate::zoom::{ZoomLevel, DEFAULT_ZOOM};

/// File name looked up by [`Config::discover`].
pub const CONFIG_FILE_NAME: &str = "chronoline.json";

/// Main configuration for chronoline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Page heading shown above the widget.
    #[serde(default = "default_page_title")]
    pub page_title: String,

    /// Title on the widget border.
    #[serde(default = "default_widget_title")]
    pub widget_title: String,

    /// Calendar months of padding on each side of the event span.
    #[serde(default = "default_padding_months")]
    pub padding_months: u32,

    /// Zoom value on mount.
    #[serde(default = "default_initial_zoom")]
    pub initial_zoom: f64,

    /// strftime pattern for dates in the detail panel.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Color theme.
    #[serde(default)]
    pub theme: ThemeName,

    /// Force ASCII glyphs (also implied by `NO_COLOR`).
    #[serde(default)]
    pub ascii: bool,

    /// Event poll interval in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_page_title() -> String {
    "My Timeline Project".into()
}

fn default_widget_title() -> String {
    "Project Timeline".into()
}

fn default_padding_months() -> u32 {
    DEFAULT_PADDING_MONTHS
}

fn default_initial_zoom() -> f64 {
    DEFAULT_ZOOM
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.into()
}

fn default_tick_rate_ms() -> u64 {
    250
}

/// Named color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    /// Dark theme.
    #[default]
    Mocha,
    /// Light theme.
    Latte,
    /// Maximum contrast for accessibility.
    HighContrast,
}

impl Config {
    /// Load configuration from a file and validate it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config: Self = serde_json::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `chronoline.json` from a directory if present.
    ///
    /// A missing file gives the defaults. A file that exists but fails to
    /// load is an error, so the caller can tell the user it was ignored.
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let config = Self::load(&path)?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Check values that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ZoomLevel::try_new(self.initial_zoom)
            .map_err(|e| ConfigError::Invalid(format!("initial_zoom: {e}")))?;
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid("tick_rate_ms must be positive".into()));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::Invalid(format!(
                "date_format is not a valid strftime pattern: {:?}",
                self.date_format
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_title: default_page_title(),
            widget_title: default_widget_title(),
            padding_months: default_padding_months(),
            initial_zoom: default_initial_zoom(),
            date_format: default_date_format(),
            theme: ThemeName::default(),
            ascii: false,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// A value is out of range.
    #[error("Invalid config: {0}")]
    Invalid(String),
}
