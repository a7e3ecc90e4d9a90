//! # Error Types
//!
//! Parsing and validation failures for the core domain types. Storage and
//! transport errors live in the crates that own those concerns and wrap
//! this type where a core value fails to parse.

use thiserror::Error;

/// Top-level error type for GraphGuard domain values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphGuardError {
    /// The submitted query was empty.
    #[error("query must not be empty")]
    EmptyQuery,

    /// A timestamp did not match `YYYY-MM-DD HH:MM:SS`.
    #[error("invalid timestamp {value:?}: expected YYYY-MM-DD HH:MM:SS")]
    InvalidTimestamp {
        /// The rejected input.
        value: String,
    },

    /// A latency was negative, non-finite, or not a number at all.
    #[error("invalid latency: {0}")]
    InvalidLatency(String),

    /// A status label outside the closed set.
    #[error("unknown status {0:?}: expected \"Success\" or \"Refusal\"")]
    UnknownStatus(String),
}
