//! Date type for exchange rate samples.

use chrono::{Datelike, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::{FxError, FxResult};

/// The only accepted textual date layout.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date.
///
/// This is a newtype wrapper around `chrono::NaiveDate` that only ever parses
/// the `YYYY-MM-DD` layout and reports failures as [`FxError::DateFormat`].
///
/// # Example
///
/// ```rust
/// use fxinterp_core::types::Date;
///
/// let date = Date::parse("2002-02-01").unwrap();
/// assert_eq!(date.month(), 2);
/// assert_eq!(date.to_string(), "2002-02-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `FxError::DateFormat` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> FxResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| {
                FxError::date_format(
                    format!("{year}-{month:02}-{day:02}"),
                    "not a valid calendar date",
                )
            })
    }

    /// Parses a `YYYY-MM-DD` string. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns `FxError::DateFormat` if the string does not match the layout
    /// or names a day that does not exist (month 13, February 30, ...).
    pub fn parse(s: &str) -> FxResult<Self> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(Date)
            .map_err(|e| FxError::date_format(s, e.to_string()))
    }

    /// Creates a date from its proleptic Gregorian ordinal (0001-01-01 is day 1).
    ///
    /// # Errors
    ///
    /// Returns `FxError::DateFormat` if the ordinal is outside chrono's range.
    pub fn from_ordinal(ordinal: i64) -> FxResult<Self> {
        i32::try_from(ordinal)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .map(Date)
            .ok_or_else(|| FxError::date_format(ordinal.to_string(), "ordinal out of range"))
    }

    /// Returns the proleptic Gregorian ordinal (0001-01-01 is day 1).
    #[must_use]
    pub fn ordinal(&self) -> i64 {
        i64::from(self.0.num_days_from_ce())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of days to the date.
    ///
    /// # Errors
    ///
    /// Returns `FxError::DateFormat` if the result is out of range.
    pub fn add_days(&self, days: i64) -> FxResult<Self> {
        TimeDelta::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Date)
            .ok_or_else(|| FxError::date_format(self.to_string(), "date arithmetic overflow"))
    }

    /// Calculates the number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for Date {
    type Err = FxError;

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
    type Output = FxResult<Self>;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}
