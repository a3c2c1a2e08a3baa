//! Zoom level.
//!
//! A bounded scalar stepped by the two zoom controls. The value only selects
//! the marker tier; it never changes the date range or event positions.

use serde::{Deserialize, Serialize};

use crate::error::ZoomError;
use crate::markers::ZoomTier;

/// Smallest zoom value (yearly markers).
pub const MIN_ZOOM: f64 = 0.5;
/// Largest zoom value (weekly markers).
pub const MAX_ZOOM: f64 = 2.0;
/// Amount added or removed by one zoom control press.
pub const ZOOM_STEP: f64 = 0.5;
/// Zoom value on mount.
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Current zoom value, always a step within `[MIN_ZOOM, MAX_ZOOM]`.
///
/// Deserializing goes through [`ZoomLevel::try_new`], so out-of-range or
/// off-step numbers are rejected rather than adjusted.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ZoomLevel(f64);

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(DEFAULT_ZOOM)
    }
}

impl TryFrom<f64> for ZoomLevel {
    type Error = ZoomError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<ZoomLevel> for f64 {
    fn from(zoom: ZoomLevel) -> Self {
        zoom.0
    }
}

impl ZoomLevel {
    /// Create a zoom level, clamping into bounds and snapping to the nearest
    /// step. `NaN` becomes the default.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        let steps = ((value.clamp(MIN_ZOOM, MAX_ZOOM) - MIN_ZOOM) / ZOOM_STEP).round();
        Self(MIN_ZOOM + steps * ZOOM_STEP)
    }

    /// Create a zoom level from an exact value.
    ///
    /// Fails for `NaN`, values outside `[MIN_ZOOM, MAX_ZOOM]` and values that
    /// are not a whole number of steps above `MIN_ZOOM`.
    pub fn try_new(value: f64) -> Result<Self, ZoomError> {
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&value) {
            return Err(ZoomError::OutOfRange {
                value,
                min: MIN_ZOOM,
                max: MAX_ZOOM,
            });
        }
        let steps = (value - MIN_ZOOM) / ZOOM_STEP;
        if (steps - steps.round()).abs() > 1e-9 {
            return Err(ZoomError::OffStep {
                value,
                step: ZOOM_STEP,
            });
        }
        Ok(Self::new(value))
    }

    /// The raw zoom value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// The marker tier for this zoom value.
    pub fn tier(self) -> ZoomTier {
        ZoomTier::for_zoom(self.0)
    }

    /// Zoom in by one step. Returns `true` if the value changed.
    pub fn increase(&mut self) -> bool {
        self.set((self.0 + ZOOM_STEP).min(MAX_ZOOM))
    }

    /// Zoom out by one step. Returns `true` if the value changed.
    pub fn decrease(&mut self) -> bool {
        self.set((self.0 - ZOOM_STEP).max(MIN_ZOOM))
    }

    /// Check if zoom is at the upper bound.
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM
    }

    /// Check if zoom is at the lower bound.
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM
    }

    fn set(&mut self, value: f64) -> bool {
        let changed = (value - self.0).abs() > f64::EPSILON;
        self.0 = value;
        changed
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_default_zoom() {
        let zoom = ZoomLevel::default();
        assert_eq!(zoom.value(), 1.0);
        assert_eq!(zoom.tier(), ZoomTier::Month);
    }

    #[test]
    fn test_increase_steps_and_clamps() {
        let mut zoom = ZoomLevel::default();
        assert!(zoom.increase());
        assert_eq!(zoom.value(), 1.5);
        assert_eq!(zoom.tier(), ZoomTier::Day);

        assert!(zoom.increase());
        assert_eq!(zoom.value(), 2.0);
        assert!(zoom.is_max());

        // Already at max
        assert!(!zoom.increase());
        assert_eq!(zoom.value(), 2.0);
    }

    #[test]
    fn test_decrease_steps_and_clamps() {
        let mut zoom = ZoomLevel::default();
        assert!(zoom.decrease());
        assert_eq!(zoom.value(), 0.5);
        assert_eq!(zoom.tier(), ZoomTier::Year);
        assert!(zoom.is_min());

        assert!(!zoom.decrease());
        assert_eq!(zoom.value(), 0.5);
    }

    #[test]
    fn test_many_clicks_stay_in_bounds() {
        let mut zoom = ZoomLevel::default();
        for _ in 0..50 {
            zoom.increase();
            assert!(zoom.value() <= MAX_ZOOM);
        }
        for _ in 0..50 {
            zoom.decrease();
            assert!(zoom.value() >= MIN_ZOOM);
        }
        assert_eq!(zoom.value(), MIN_ZOOM);
    }

    #[test]
    fn test_new_clamps() {
        assert_eq!(ZoomLevel::new(0.1).value(), MIN_ZOOM);
        assert_eq!(ZoomLevel::new(9.0).value(), MAX_ZOOM);
        assert_eq!(ZoomLevel::new(f64::NAN).value(), DEFAULT_ZOOM);
        assert_eq!(ZoomLevel::new(1.5).value(), 1.5);
    }

    #[test]
    fn test_new_snaps_to_step() {
        assert_eq!(ZoomLevel::new(1.2).value(), 1.0);
        assert_eq!(ZoomLevel::new(1.3).value(), 1.5);

        let mut zoom = ZoomLevel::new(0.75);
        assert_eq!(zoom.value(), 1.0);
        zoom.increase();
        assert_eq!(zoom.value(), 1.5);
    }

    #[test]
    fn test_try_new_accepts_steps() {
        for value in [0.5, 1.0, 1.5, 2.0] {
            assert_eq!(ZoomLevel::try_new(value).unwrap().value(), value);
        }
    }

    #[test]
    fn test_try_new_rejects_bad_values() {
        assert!(matches!(
            ZoomLevel::try_new(0.75),
            Err(ZoomError::OffStep { .. })
        ));
        assert!(matches!(
            ZoomLevel::try_new(9.0),
            Err(ZoomError::OutOfRange { .. })
        ));
        assert!(matches!(
            ZoomLevel::try_new(f64::NAN),
            Err(ZoomError::OutOfRange { .. })
        ));
        assert_eq!(
            ZoomLevel::try_new(0.0).unwrap_err().to_string(),
            "zoom must be between 0.5 and 2, got 0"
        );
    }

    #[test]
    fn test_serde_as_plain_number() {
        let zoom: ZoomLevel = serde_json::from_str("1.5").unwrap();
        assert_eq!(zoom.value(), 1.5);
        assert_eq!(serde_json::to_string(&zoom).unwrap(), "1.5");

        assert!(serde_json::from_str::<ZoomLevel>("1.25").is_err());
        assert!(serde_json::from_str::<ZoomLevel>("7.0").is_err());
    }
}
