//! # Audit Errors
//!
//! Store errors split into two classes: directory creation failures, which
//! are fatal because nothing can be logged, and read/parse failures, which
//! the metrics view absorbs.

use std::path::PathBuf;

use gg_core::GraphGuardError;
use gg_responder::ResponderError;
use thiserror::Error;

/// Message shown to the user when a query is empty.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a query.";

/// Error in the audit table.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The directory containing the table could not be created.
    #[error("cannot create audit log directory {path}: {source}")]
    CreateDir {
        /// Directory that failed.
        path: PathBuf,
        /// Underlying failure.
        source: std::io::Error,
    },

    /// The table could not be opened, read, or written.
    #[error("audit log {path}: {source}")]
    Io {
        /// Table path.
        path: PathBuf,
        /// Underlying failure.
        source: std::io::Error,
    },

    /// CSV encoding or decoding failed (including rows with the wrong field count).
    #[error("audit log csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The first row is not the expected five-column header.
    #[error("audit log header mismatch: found {found:?}")]
    HeaderMismatch {
        /// The header that was read, comma-joined.
        found: String,
    },

    /// A data row has a field that fails to parse.
    #[error("audit log row {row} is malformed: {source}")]
    MalformedRow {
        /// 1-based data row number (the header is row 0).
        row: usize,
        /// The field-level failure.
        source: GraphGuardError,
    },
}

/// Error loading an [`AuditConfig`](crate::AuditConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read config {path}: {source}")]
    Read {
        /// Config path.
        path: PathBuf,
        /// Underlying failure.
        source: std::io::Error,
    },

    /// The config file is not valid YAML for this schema.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Error submitting a query through the audit service.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The query was empty; nothing was answered or logged.
    #[error("{}", EMPTY_QUERY_MESSAGE)]
    EmptyQuery,

    /// The responder failed; nothing was logged.
    #[error(transparent)]
    Responder(#[from] ResponderError),

    /// The answer was produced but could not be logged.
    #[error(transparent)]
    Store(#[from] StoreError),
}
