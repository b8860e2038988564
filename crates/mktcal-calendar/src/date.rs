//! `CalendarDate` — plain (year, month, day) triple.
//!
//! Used only as a lookup key into the holiday and early-close tables.
//! Equality is structural. The constructor is `const` so the static tables
//! can be written as literal arrays.

use chrono::{Datelike, NaiveDate};
use mktcal_core::errors::{Error, Result};

/// A calendar date in the exchange's local calendar.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Create a date from year, month (1–12), and day-of-month (1–31).
    ///
    /// # Panics
    /// Panics (at compile time for `const` uses) if `month` or `day` is out
    /// of its structural range. Whether the triple names a real day of the
    /// given month is not checked; a nonsense entry simply never matches.
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        assert!(month >= 1 && month <= 12, "month out of range [1, 12]");
        assert!(day >= 1 && day <= 31, "day out of range [1, 31]");
        CalendarDate { year, month, day }
    }

    /// Return the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Return the day of the month (1–31).
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Convert to a `chrono::NaiveDate`.
    ///
    /// # Errors
    /// Returns [`Error::Date`] if the triple does not name a real calendar
    /// day (e.g. February 30).
    pub fn to_naive(&self) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .ok_or_else(|| Error::Date(format!("{self} is not a valid calendar day")))
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl std::fmt::Debug for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CalendarDate({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_equality() {
        assert_eq!(CalendarDate::new(2023, 6, 15), CalendarDate::new(2023, 6, 15));
        assert_ne!(CalendarDate::new(2023, 6, 15), CalendarDate::new(2024, 6, 15));
        assert_ne!(CalendarDate::new(2023, 6, 15), CalendarDate::new(2023, 7, 15));
        assert_ne!(CalendarDate::new(2023, 6, 15), CalendarDate::new(2023, 6, 16));
    }

    #[test]
    fn from_naive_date() {
        let naive = NaiveDate::from_ymd_opt(2021, 11, 25).unwrap();
        assert_eq!(CalendarDate::from(naive), CalendarDate::new(2021, 11, 25));
    }

    #[test]
    fn display_is_iso_like() {
        assert_eq!(CalendarDate::new(2021, 1, 4).to_string(), "2021-01-04");
    }

    #[test]
    fn to_naive_rejects_nonsense_triples() {
        assert_eq!(
            CalendarDate::new(2021, 11, 25).to_naive().unwrap(),
            NaiveDate::from_ymd_opt(2021, 11, 25).unwrap()
        );
        assert!(matches!(
            CalendarDate::new(2023, 2, 30).to_naive(),
            Err(Error::Date(_))
        ));
    }
}
