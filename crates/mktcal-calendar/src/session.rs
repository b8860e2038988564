//! `TradingSession` — one trading day's open/close boundaries.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use chrono_tz::Tz;

/// One trading day's open-to-close window, in the exchange timezone.
///
/// Invariant: `open < close`, and both fall on the same exchange-local
/// calendar date. Sessions are recomputed from the reference instant on every
/// query and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradingSession {
    /// The session's opening instant (09:30 exchange-local).
    pub open: DateTime<Tz>,
    /// The session's closing instant (16:00 exchange-local, or 13:00 on an
    /// early-close day).
    pub close: DateTime<Tz>,
}

impl TradingSession {
    /// The exchange-local calendar date this session falls on.
    pub fn date(&self) -> NaiveDate {
        self.open.date_naive()
    }

    /// Return `true` if `instant` falls inside the session window
    /// (open inclusive, close exclusive).
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.open <= instant && instant < self.close
    }

    /// The session's length.
    pub fn duration(&self) -> TimeDelta {
        self.close.signed_duration_since(self.open)
    }

    /// The opening instant as a Unix timestamp (seconds), as consumed by
    /// upstream market-data query windows.
    pub fn open_unix(&self) -> i64 {
        self.open.timestamp()
    }

    /// The closing instant as a Unix timestamp (seconds).
    pub fn close_unix(&self) -> i64 {
        self.close.timestamp()
    }
}

impl std::fmt::Display for TradingSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}–{}",
            self.date(),
            self.open.format("%H:%M"),
            self.close.format("%H:%M")
        )
    }
}
