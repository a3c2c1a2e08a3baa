//! Percentage to column mapping.
//!
//! Percentages come from [`crate::DateRange::position`] and are independent of
//! the screen. Columns depend on the measured width of the drawing area.

/// Map a percentage offset onto a column within `width` cells.
///
/// `0.0` maps to column 0 and `100.0` to `width - 1`. Percentages outside
/// `[0, 100]` (dates outside the range) and non-finite values return `None`,
/// as does a zero width.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn column(percent: f64, width: u16) -> Option<u16> {
    if width == 0 || !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
        return None;
    }
    let last = f64::from(width - 1);
    Some((percent / 100.0 * last).round() as u16)
}
