//! Error types for mktcal.
//!
//! The calendar engine is pure arithmetic: its query operations are total and
//! never return errors. The variants here cover the only fallible paths —
//! construction-time configuration and out-of-range calendar arithmetic
//! surfaced by fallible constructors.

use thiserror::Error;

/// The top-level error type used throughout mktcal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Static configuration could not be resolved at initialization
    /// (e.g. an unknown timezone identifier). Fatal: the engine must not be
    /// constructed, and the condition never propagates per-query.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Date-related error (a year/month/day triple that does not name a real
    /// calendar day, or out-of-range arithmetic).
    #[error("date error: {0}")]
    Date(String),
}

/// Shorthand `Result` type used throughout mktcal.
pub type Result<T, E = Error> = std::result::Result<T, E>;
