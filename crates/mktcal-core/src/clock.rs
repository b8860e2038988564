//! Injectable clock capability.
//!
//! The source application read a process-wide "now" wherever it needed the
//! current instant, which makes calendar behavior untestable without freezing
//! the wall clock. Here the current instant is a capability: callers hold a
//! [`Clock`] and pass the instant it yields into the calendar's query API.
//! Production code uses [`SystemClock`]; tests use [`FixedClock`] to pin any
//! scenario deterministically.

use chrono::{DateTime, Utc};

/// A source of the current instant.
///
/// Implementations must be cheap to query; the consuming UI scheduler calls
/// this roughly once per second.
pub trait Clock: Send + Sync {
    /// Return the current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Real wall-clock time, for production use.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock.
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a fixed instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Create a clock that always reports `instant`.
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
