//! Calendar stepping with rollover.
//!
//! Month and year steps keep the day-of-month and let any overflow spill into
//! the following month, so `2024-12-31 + 2 months` is `2025-03-03` rather than
//! being clamped to the end of February.

use chrono::{Datelike, Days, NaiveDate};

/// Shift `date` by a signed number of calendar months.
///
/// Returns `None` if the result falls outside chrono's representable range.
pub fn add_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let month0 = i32::try_from(date.month0()).ok()?;
    let total = date.year().checked_mul(12)?.checked_add(month0)?.checked_add(months)?;

    let year = total.div_euclid(12);
    let target_month0 = u32::try_from(total.rem_euclid(12)).ok()?;

    let first = NaiveDate::from_ymd_opt(year, target_month0 + 1, 1)?;
    first.checked_add_days(Days::new(u64::from(date.day0())))
}

/// Shift `date` by a signed number of calendar years.
///
/// Feb 29 rolls into Mar 1 on non-leap targets.
pub fn add_years(date: NaiveDate, years: i32) -> Option<NaiveDate> {
    add_months(date, years.checked_mul(12)?)
}

/// Shift `date` forward by a number of days.
pub fn add_days(date: NaiveDate, days: u64) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(days))
}
