//! Actual/365 Fixed day count convention.

use super::DayCount;
use crate::types::Date;

/// Days in the fixed ACT/365 year.
pub(crate) const DAYS_PER_YEAR: f64 = 365.0;

/// Actual/365 Fixed day count convention.
///
/// The day count is the actual number of days between dates.
/// The year basis is always 365 days (ignoring leap years).
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{365}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365F"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / DAYS_PER_YEAR
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}
