//! # mktcal-core
//!
//! Error type, `Result` alias, and the injectable clock capability shared by
//! the mktcal crates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Injectable clock capability.
pub mod clock;

/// Error and `Result` types.
pub mod errors;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{Error, Result};
