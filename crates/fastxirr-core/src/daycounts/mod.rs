//! Day count conventions.
//!
//! XIRR discounts with ACT/365 Fixed: elapsed calendar days divided by 365,
//! with no leap-year adjustment.

mod act365;

pub use act365::Act365Fixed;

use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Negative if `end` is before `start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Calculates the day count between two dates.
    fn day_count(&self, start: Date, end: Date) -> i64;
}
