//! `Span` — named lookback durations.
//!
//! A span maps a chart range ("1W", "3M", "10Y", …) to a fixed calendar
//! offset applied to the most recent session's open. Month and year offsets
//! use calendar arithmetic with end-of-month clamping: one month before
//! March 31 lands on the last day of February.

use chrono::{Days, Months, NaiveDate};

/// A named lookback duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Span {
    /// The most recent trading day (no offset).
    Day,
    /// One calendar week (7 days).
    Week,
    /// One calendar month.
    Month,
    /// Three calendar months.
    ThreeMonths,
    /// Six calendar months.
    SixMonths,
    /// One calendar year.
    Year,
    /// Two calendar years.
    TwoYears,
    /// Five calendar years.
    FiveYears,
    /// Ten calendar years.
    TenYears,
}

impl Span {
    /// All spans, in increasing length order.
    pub const ALL: [Span; 9] = [
        Span::Day,
        Span::Week,
        Span::Month,
        Span::ThreeMonths,
        Span::SixMonths,
        Span::Year,
        Span::TwoYears,
        Span::FiveYears,
        Span::TenYears,
    ];

    /// Apply this span's calendar offset backward from `date`.
    ///
    /// `Span::Day` returns `date` unchanged; callers treat it as "the most
    /// recent session" without any offset.
    pub fn rewind(&self, date: NaiveDate) -> NaiveDate {
        let months = |n: u32| {
            date.checked_sub_months(Months::new(n))
                .expect("span arithmetic within supported date range")
        };
        match self {
            Span::Day => date,
            Span::Week => date
                .checked_sub_days(Days::new(7))
                .expect("span arithmetic within supported date range"),
            Span::Month => months(1),
            Span::ThreeMonths => months(3),
            Span::SixMonths => months(6),
            Span::Year => months(12),
            Span::TwoYears => months(24),
            Span::FiveYears => months(60),
            Span::TenYears => months(120),
        }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Span::Day => "1D",
            Span::Week => "1W",
            Span::Month => "1M",
            Span::ThreeMonths => "3M",
            Span::SixMonths => "6M",
            Span::Year => "1Y",
            Span::TwoYears => "2Y",
            Span::FiveYears => "5Y",
            Span::TenYears => "10Y",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_is_seven_calendar_days() {
        assert_eq!(Span::Week.rewind(date(2023, 6, 14)), date(2023, 6, 7));
        // Across a month boundary
        assert_eq!(Span::Week.rewind(date(2023, 7, 3)), date(2023, 6, 26));
    }

    #[test]
    fn month_clamps_to_end_of_month() {
        // One month before March 31 is the last day of February
        assert_eq!(Span::Month.rewind(date(2023, 3, 31)), date(2023, 2, 28));
        assert_eq!(Span::Month.rewind(date(2024, 3, 31)), date(2024, 2, 29)); // leap
    }

    #[test]
    fn year_offsets_are_calendar_years() {
        assert_eq!(Span::Year.rewind(date(2023, 6, 14)), date(2022, 6, 14));
        assert_eq!(Span::TwoYears.rewind(date(2023, 6, 14)), date(2021, 6, 14));
        assert_eq!(Span::TenYears.rewind(date(2023, 6, 14)), date(2013, 6, 14));
        // Feb 29 minus one year clamps to Feb 28
        assert_eq!(Span::Year.rewind(date(2024, 2, 29)), date(2023, 2, 28));
    }

    #[test]
    fn day_is_identity() {
        assert_eq!(Span::Day.rewind(date(2023, 6, 14)), date(2023, 6, 14));
    }

    #[test]
    fn labels() {
        let labels: Vec<String> = Span::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            labels,
            ["1D", "1W", "1M", "3M", "6M", "1Y", "2Y", "5Y", "10Y"]
        );
    }
}
