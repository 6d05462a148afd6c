//! Date type for cash flow discounting.

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// Days from 0001-01-01 (CE day 1) to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Seconds in a calendar day.
const SECONDS_PER_DAY: i64 = 86_400;

/// A calendar date with day resolution.
///
/// This is a newtype wrapper around `chrono::NaiveDate`. Only whole-day
/// differences between dates matter to the discounting code, so dates
/// built from epoch timestamps are floored to their UTC day.
///
/// # Example
///
/// ```rust
/// use fastxirr_core::types::Date;
///
/// let date = Date::from_ymd(2020, 1, 1).unwrap();
/// assert_eq!(Date::from_timestamp(1_577_836_800).unwrap(), date);
/// assert_eq!(date.days_between(&Date::from_ymd(2021, 1, 1).unwrap()), 366);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Creates a date from a count of days since 1970-01-01.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the day count is out of range.
    pub fn from_epoch_days(days: i64) -> CoreResult<Self> {
        days.checked_add(UNIX_EPOCH_DAYS_FROM_CE)
            .and_then(|ce| i32::try_from(ce).ok())
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{days} days from epoch")))
    }

    /// Creates a date from a Unix timestamp in seconds.
    ///
    /// The time of day is discarded: the result is the UTC calendar day
    /// containing the instant.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the timestamp is out of range.
    pub fn from_timestamp(seconds: i64) -> CoreResult<Self> {
        DateTime::from_timestamp(seconds, 0)
            .map(|dt| Date(dt.date_naive()))
            .ok_or_else(|| CoreError::invalid_date(format!("timestamp {seconds}")))
    }

    /// Returns the number of days since 1970-01-01 (negative before it).
    #[must_use]
    pub fn epoch_days(&self) -> i64 {
        i64::from(self.0.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE
    }

    /// Returns the Unix timestamp of midnight UTC on this date.
    #[must_use]
    pub fn timestamp(&self) -> i64 {
        self.epoch_days() * SECONDS_PER_DAY
    }

    /// Adds a number of days to the date.
    ///
    /// Returns `None` if the result falls outside the supported date range.
    #[must_use]
    pub fn checked_add_days(&self, days: i64) -> Option<Self> {
        chrono::TimeDelta::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Date)
    }

    /// Calculates the number of calendar days between two dates.
    ///
    /// Positive when `other` is after `self`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    ///
    /// # Panics
    ///
    /// Panics if the result is out of range; use [`Date::checked_add_days`]
    /// for a fallible version.
    fn add(self, days: i64) -> Self::Output {
        Date(self.0 + chrono::TimeDelta::days(days))
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    ///
    /// # Panics
    ///
    /// Panics if the result is out of range.
    fn sub(self, days: i64) -> Self::Output {
        Date(self.0 - chrono::TimeDelta::days(days))
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(date.to_string(), "2025-06-15");
        assert_eq!(NaiveDate::from(date), NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2025, 2, 30).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
    }

    #[test]
    fn test_parse() {
        let date = Date::parse("2025-06-15").unwrap();
        assert_eq!(date, Date::from_ymd(2025, 6, 15).unwrap());
        assert_eq!("2025-06-15".parse::<Date>().unwrap(), date);
        assert!(Date::parse("15/06/2025").is_err());
    }

    #[test]
    fn test_epoch_days_roundtrip_boundaries() {
        let epoch = Date::from_epoch_days(0).unwrap();
        assert_eq!(epoch, Date::from_ymd(1970, 1, 1).unwrap());
        assert_eq!(epoch.epoch_days(), 0);

        let before = Date::from_ymd(1957, 1, 1).unwrap();
        assert_eq!(Date::from_epoch_days(before.epoch_days()).unwrap(), before);
        assert!(before.epoch_days() < 0);

        assert!(Date::from_epoch_days(i64::MAX).is_err());
    }

    #[test]
    fn test_from_timestamp_floors_to_day() {
        let date = Date::from_ymd(2020, 1, 1).unwrap();
        assert_eq!(Date::from_timestamp(1_577_836_800).unwrap(), date);
        assert_eq!(Date::from_timestamp(1_577_836_800 + 86_399).unwrap(), date);
        assert_eq!(
            Date::from_timestamp(-1).unwrap(),
            Date::from_ymd(1969, 12, 31).unwrap()
        );
        assert_eq!(date.timestamp(), 1_577_836_800);
    }

    #[test]
    fn test_days_between() {
        let d1 = Date::from_ymd(2020, 1, 1).unwrap();
        let d2 = Date::from_ymd(2021, 1, 1).unwrap();
        assert_eq!(d1.days_between(&d2), 366);
        assert_eq!(d2.days_between(&d1), -366);
        assert_eq!(d2 - d1, 366);
    }

    #[test]
    fn test_add_days() {
        let date = Date::from_ymd(2024, 2, 28).unwrap();
        assert_eq!(date + 1, Date::from_ymd(2024, 2, 29).unwrap());
        assert_eq!(date - 59, Date::from_ymd(2023, 12, 31).unwrap());
        assert_eq!(date.checked_add_days(-59), Some(date - 59));
    }

    #[test]
    fn test_checked_add_days_out_of_range() {
        let date = Date::from_ymd(2024, 2, 28).unwrap();
        assert_eq!(date.checked_add_days(i64::MAX), None);
        assert_eq!(date.checked_add_days(i64::MIN), None);
        assert_eq!(date.checked_add_days(1_000_000_000), None);
    }

    #[test]
    #[should_panic]
    fn test_add_out_of_range_panics() {
        let date = Date::from_ymd(2024, 2, 28).unwrap();
        let _ = date + 1_000_000_000;
    }

    #[test]
    fn test_serde_transparent() {
        let date = Date::from_ymd(2023, 5, 22).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2023-05-22\"");
        let back: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }
}
