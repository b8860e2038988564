//! `TradingCalendar` — the query engine.
//!
//! A pure function library over (reference instant, fixed calendar data).
//! Every operation derives its answer from the `now` it is handed and the
//! immutable tables; nothing is cached, so concurrent callers need no
//! synchronization. Loops are bounded by the longest weekend/holiday streak
//! in the table, a handful of days.

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, TimeZone, Utc, Weekday};
use chrono_tz::Tz;
use mktcal_core::errors::{Error, Result};

use crate::date::CalendarDate;
use crate::nyse::{NYSE_EARLY_CLOSES, NYSE_HOLIDAYS, NYSE_TIMEZONE};
use crate::session::TradingSession;
use crate::span::Span;

/// Standard session open, exchange-local.
const OPEN_HOUR: u32 = 9;
const OPEN_MINUTE: u32 = 30;
/// Standard session close, exchange-local.
const STANDARD_CLOSE_HOUR: u32 = 16;
/// Early close, exchange-local.
const EARLY_CLOSE_HOUR: u32 = 13;

/// Trading-calendar engine for a single exchange.
///
/// Stateless apart from its construction-time configuration: the exchange
/// timezone and the holiday/early-close tables. See the crate docs for the
/// query model.
#[derive(Debug, Clone)]
pub struct TradingCalendar {
    tz: Tz,
    holidays: Vec<CalendarDate>,
    early_closes: Vec<CalendarDate>,
}

impl TradingCalendar {
    /// Create an engine for `tz` with the given tables.
    pub fn new(tz: Tz, holidays: &[CalendarDate], early_closes: &[CalendarDate]) -> Self {
        TradingCalendar {
            tz,
            holidays: holidays.to_vec(),
            early_closes: early_closes.to_vec(),
        }
    }

    /// Create an engine from a timezone identifier such as
    /// `"America/New_York"`.
    ///
    /// # Errors
    /// Returns [`Error::Configuration`] if the identifier is not in the
    /// timezone database. This is fatal at initialization; it never surfaces
    /// per-query.
    pub fn with_timezone(
        name: &str,
        holidays: &[CalendarDate],
        early_closes: &[CalendarDate],
    ) -> Result<Self> {
        let tz: Tz = name
            .parse()
            .map_err(|e| Error::Configuration(format!("unknown timezone {name:?}: {e}")))?;
        Ok(Self::new(tz, holidays, early_closes))
    }

    /// The canonical NYSE engine with the built-in 2021–2026 tables.
    pub fn nyse() -> Self {
        Self::new(NYSE_TIMEZONE, NYSE_HOLIDAYS, NYSE_EARLY_CLOSES)
    }

    /// The exchange timezone.
    pub fn timezone(&self) -> Tz {
        self.tz
    }

    // ── Per-date queries ─────────────────────────────────────────────────────

    /// 09:30:00.000 exchange-local on `date`. Does not check holiday or
    /// weekend status.
    pub fn standard_open(&self, date: NaiveDate) -> DateTime<Tz> {
        self.at_wall_clock(date, OPEN_HOUR, OPEN_MINUTE)
    }

    /// 16:00:00.000 exchange-local on `date`, or 13:00:00.000 when `date` is
    /// an early-close day. Does not check holiday or weekend status.
    pub fn close(&self, date: NaiveDate) -> DateTime<Tz> {
        if self.is_early_close(date) {
            self.at_wall_clock(date, EARLY_CLOSE_HOUR, 0)
        } else {
            self.at_wall_clock(date, STANDARD_CLOSE_HOUR, 0)
        }
    }

    /// Return `true` if `date` is a full-closure day (exact year/month/day
    /// match against the holiday table).
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&CalendarDate::from(date))
    }

    /// Return `true` if `date` closes at 13:00 instead of 16:00.
    pub fn is_early_close(&self, date: NaiveDate) -> bool {
        self.early_closes.contains(&CalendarDate::from(date))
    }

    /// Return `true` if `date` is a Saturday or Sunday.
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Return `true` if `date` is neither a weekend nor a holiday.
    pub fn is_trading_day(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    // ── Instant queries ──────────────────────────────────────────────────────

    /// The exchange-local calendar date of `now`.
    pub fn local_date(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.tz).date_naive()
    }

    /// Return `true` if `now` is before today's 09:30 open (exchange-local),
    /// regardless of whether today is a trading day.
    pub fn is_before_open(&self, now: DateTime<Utc>) -> bool {
        now < self.standard_open(self.local_date(now))
    }

    /// The most recent session whose date is at or before today.
    ///
    /// Pre-market always resolves to the previous completed session: when
    /// `now` is before today's open the search starts from yesterday even if
    /// today is itself a valid trading day. From the starting date, weekends
    /// and holidays are skipped backward one day at a time.
    pub fn latest_session(&self, now: DateTime<Utc>) -> TradingSession {
        let mut date = self.local_date(now);
        if now < self.standard_open(date) {
            date = prev_day(date);
        }
        while !self.is_trading_day(date) {
            date = prev_day(date);
        }
        self.session_on(date)
    }

    /// Return `true` if `now` falls inside the most recent session's window
    /// (open inclusive, close exclusive).
    pub fn is_market_open(&self, now: DateTime<Utc>) -> bool {
        self.latest_session(now).contains(now)
    }

    /// The next session at or after `now`.
    ///
    /// Today's session when today is a valid trading day and `now` is
    /// strictly before today's open; otherwise the first valid trading date
    /// after today.
    pub fn next_session(&self, now: DateTime<Utc>) -> TradingSession {
        let today = self.local_date(now);
        if self.is_trading_day(today) && now < self.standard_open(today) {
            return self.session_on(today);
        }
        let mut date = next_day(today);
        while !self.is_trading_day(date) {
            date = next_day(date);
        }
        self.session_on(date)
    }

    /// Time remaining until the next open. Zero while the market is open.
    pub fn time_until_open(&self, now: DateTime<Utc>) -> TimeDelta {
        if self.is_market_open(now) {
            TimeDelta::zero()
        } else {
            self.next_session(now).open.signed_duration_since(now)
        }
    }

    /// Time remaining until the current session's close. Zero while the
    /// market is closed.
    pub fn time_until_close(&self, now: DateTime<Utc>) -> TimeDelta {
        if self.is_market_open(now) {
            self.latest_session(now).close.signed_duration_since(now)
        } else {
            TimeDelta::zero()
        }
    }

    /// The first session boundary for a lookback span ending at `now`.
    ///
    /// `Span::Day` returns the most recent session's open directly. Other
    /// spans apply their calendar offset to that open's date, then roll the
    /// result forward over weekends and holidays to the nearest valid trading
    /// date. The roll stops once today (exchange-local) is reached, even when
    /// today is itself a weekend or holiday, so in that narrow case the
    /// boundary can name a non-trading date. That limit behavior is kept
    /// as-is from the application this engine replaces.
    pub fn span_start(&self, now: DateTime<Utc>, span: Span) -> DateTime<Tz> {
        let open = self.latest_session(now).open;
        if span == Span::Day {
            return open;
        }
        let today = self.local_date(now);
        let start = self.first_trading_day_on_or_after(span.rewind(open.date_naive()), today);
        self.standard_open(start)
    }

    // ── Internals ────────────────────────────────────────────────────────────

    fn session_on(&self, date: NaiveDate) -> TradingSession {
        TradingSession {
            open: self.standard_open(date),
            close: self.close(date),
        }
    }

    /// Roll `date` forward to the first valid trading date, stopping at
    /// `limit` regardless of its validity.
    fn first_trading_day_on_or_after(&self, mut date: NaiveDate, limit: NaiveDate) -> NaiveDate {
        while !self.is_trading_day(date) && date != limit {
            date = next_day(date);
        }
        date
    }

    fn at_wall_clock(&self, date: NaiveDate, hour: u32, minute: u32) -> DateTime<Tz> {
        self.tz
            .with_ymd_and_hms(date.year(), date.month(), date.day(), hour, minute, 0)
            .single()
            .expect("session wall-clock times never fall inside a DST transition")
    }
}

fn prev_day(date: NaiveDate) -> NaiveDate {
    date.pred_opt().expect("date within supported range")
}

fn next_day(date: NaiveDate) -> NaiveDate {
    date.succ_opt().expect("date within supported range")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn eastern(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        NYSE_TIMEZONE
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn open_and_close_instants_are_wall_clock() {
        let cal = TradingCalendar::nyse();
        let wednesday = date(2023, 6, 14);
        let open = cal.standard_open(wednesday);
        assert_eq!(open.format("%H:%M:%S").to_string(), "09:30:00");
        assert_eq!(open.timestamp_subsec_nanos(), 0);
        let close = cal.close(wednesday);
        assert_eq!(close.format("%H:%M:%S").to_string(), "16:00:00");
    }

    #[test]
    fn open_does_not_check_validity() {
        let cal = TradingCalendar::nyse();
        // A Saturday and a holiday still get nominal boundaries
        let saturday = date(2023, 6, 17);
        assert_eq!(cal.standard_open(saturday).format("%H:%M").to_string(), "09:30");
        let christmas = date(2023, 12, 25);
        assert_eq!(cal.close(christmas).format("%H:%M").to_string(), "16:00");
    }

    #[test]
    fn early_close_days_close_at_one_pm() {
        let cal = TradingCalendar::nyse();
        assert_eq!(cal.close(date(2022, 11, 25)).format("%H:%M").to_string(), "13:00");
        assert_eq!(cal.close(date(2021, 11, 25)).format("%H:%M").to_string(), "13:00");
        assert_eq!(cal.close(date(2024, 12, 24)).format("%H:%M").to_string(), "13:00");
    }

    #[test]
    fn weekend_and_holiday_classification() {
        let cal = TradingCalendar::nyse();
        assert!(cal.is_weekend(date(2023, 6, 17))); // Saturday
        assert!(cal.is_weekend(date(2023, 6, 18))); // Sunday
        assert!(!cal.is_weekend(date(2023, 6, 16)));
        assert!(cal.is_holiday(date(2023, 7, 4)));
        assert!(!cal.is_holiday(date(2023, 7, 5)));
        assert!(cal.is_trading_day(date(2023, 6, 14)));
        assert!(!cal.is_trading_day(date(2023, 6, 19))); // Juneteenth
    }

    #[test]
    fn is_before_open_compares_against_todays_nominal_open() {
        let cal = TradingCalendar::nyse();
        assert!(cal.is_before_open(eastern(2023, 6, 14, 9, 29)));
        assert!(!cal.is_before_open(eastern(2023, 6, 14, 9, 30)));
        // Holds on non-trading days too
        assert!(cal.is_before_open(eastern(2023, 6, 17, 8, 0)));
    }

    #[test]
    fn unknown_timezone_is_a_configuration_error() {
        let err = TradingCalendar::with_timezone("America/Atlantis", &[], &[]).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn known_timezone_resolves() {
        let cal =
            TradingCalendar::with_timezone("America/New_York", NYSE_HOLIDAYS, NYSE_EARLY_CLOSES)
                .unwrap();
        assert_eq!(cal.timezone(), NYSE_TIMEZONE);
    }

    #[test]
    fn roll_forward_stops_at_limit_even_when_invalid() {
        let cal = TradingCalendar::nyse();
        // Saturday start, Sunday limit: both invalid, loop must stop at the
        // limit and hand back a weekend date.
        let rolled = cal.first_trading_day_on_or_after(date(2023, 6, 17), date(2023, 6, 18));
        assert_eq!(rolled, date(2023, 6, 18));
        assert!(cal.is_weekend(rolled));
        // Start == limit: no stepping at all, even on a holiday.
        let juneteenth = date(2023, 6, 19);
        assert_eq!(cal.first_trading_day_on_or_after(juneteenth, juneteenth), juneteenth);
    }

    #[test]
    fn roll_forward_finds_next_trading_day_before_limit() {
        let cal = TradingCalendar::nyse();
        // Saturday before Juneteenth 2023: Sat 17, Sun 18, Mon 19 (holiday),
        // Tue 20 is the first valid date.
        let rolled = cal.first_trading_day_on_or_after(date(2023, 6, 17), date(2023, 6, 30));
        assert_eq!(rolled, date(2023, 6, 20));
    }
}
