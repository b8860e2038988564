//! # mktcal-calendar
//!
//! Trading-calendar engine for a US-equity watchlist application.
//!
//! Given a reference instant and fixed holiday/early-close tables, the engine
//! answers: is the market open, what are the most-recent and next trading
//! session's boundaries, how long until open/close, and what is the first
//! session boundary for a named lookback span. All arithmetic is performed in
//! the exchange's local timezone with DST-aware wall-clock rules.
//!
//! Every operation is a pure function of its instant-valued input and the
//! immutable static tables; there is no shared mutable state and no I/O.
//!
//! ```
//! use mktcal_calendar::TradingCalendar;
//! use mktcal_core::{Clock, SystemClock};
//!
//! let calendar = TradingCalendar::nyse();
//! let clock = SystemClock::new();
//! let now = clock.now();
//! if calendar.is_market_open(now) {
//!     println!("closes in {}s", calendar.time_until_close(now).num_seconds());
//! } else {
//!     println!("opens in {}s", calendar.time_until_open(now).num_seconds());
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `TradingCalendar` — the query engine.
pub mod calendar;

/// `CalendarDate` — plain (year, month, day) lookup key.
pub mod date;

/// Static NYSE holiday and early-close tables.
pub mod nyse;

/// `TradingSession` — one trading day's open/close boundaries.
pub mod session;

/// `Span` — named lookback durations.
pub mod span;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::TradingCalendar;
pub use date::CalendarDate;
pub use nyse::{NYSE_EARLY_CLOSES, NYSE_HOLIDAYS, NYSE_TIMEZONE};
pub use session::TradingSession;
pub use span::Span;
