//! # Audit Log Store
//!
//! The audit table is a single CSV file with a mandatory five-column
//! header. It is created lazily, grows by one row per answered query, and
//! is never rewritten.
//!
//! ## Invariants
//!
//! - The header is written exactly once, by whichever call first finds the
//!   file absent. Creation uses `create_new`, so an existing table is never
//!   truncated even if two initialisations race. If writing the header
//!   fails, the new file is removed again.
//! - `append()` only ever opens the file in append mode.
//! - Handles are scoped to a single call. Nothing is cached between calls,
//!   so a restarted process sees exactly what is on disk.
//!
//! ## Format
//!
//! Minimal quoting: fields are quoted only when they contain a delimiter,
//! quote, or line break. Tables written with CRLF terminators read the same
//! as LF tables.

use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use gg_core::{AuditRecord, EvidenceSource, GraphGuardError, Latency, Status, Timestamp};

use crate::config::AuditConfig;
use crate::error::StoreError;

/// Column names, in table order.
pub const HEADER: [&str; 5] = [
    "Timestamp",
    "Query",
    "Latency_Seconds",
    "Evidence_Source",
    "Status",
];

/// Append-only CSV audit table.
#[derive(Debug, Clone)]
pub struct AuditLogStore {
    config: AuditConfig,
}

impl AuditLogStore {
    /// Bind a store to its configuration. Touches nothing on disk.
    pub fn new(config: AuditConfig) -> Self {
        Self { config }
    }

    /// The configuration this store was built with.
    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Path of the CSV table.
    pub fn path(&self) -> &Path {
        &self.config.log_file
    }

    /// Create the containing directory and the header row if the table is
    /// absent. Returns `true` when this call created the table.
    ///
    /// # Errors
    ///
    /// [`StoreError::CreateDir`] when the directory cannot be created; no
    /// query can be logged in that state.
    pub fn ensure_initialized(&self) -> Result<bool, StoreError> {
        self.ensure_initialized_with(|file| self.write_header(file))
    }

    fn ensure_initialized_with<F>(&self, write_header: F) -> Result<bool, StoreError>
    where
        F: FnOnce(File) -> Result<(), StoreError>,
    {
        let path = self.path();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| StoreError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => {
                if let Err(e) = write_header(file) {
                    // A headerless file would pass as initialised on every later call.
                    if let Err(cleanup) = fs::remove_file(path) {
                        tracing::error!(
                            path = %path.display(),
                            error = %cleanup,
                            "could not remove partially written audit log"
                        );
                    }
                    return Err(e);
                }
                tracing::info!(path = %path.display(), "audit log created");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
            Err(source) => Err(self.io_error(source)),
        }
    }

    /// Append one row.
    ///
    /// Initialises the table first if it has gone missing, so a row is never
    /// written without a header above it.
    pub fn append(&self, record: &AuditRecord) -> Result<(), StoreError> {
        self.ensure_initialized()?;

        let file = OpenOptions::new()
            .append(true)
            .open(self.path())
            .map_err(|source| self.io_error(source))?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.write_record(to_row(record))?;
        writer.flush().map_err(|source| self.io_error(source))?;

        tracing::debug!(
            path = %self.path().display(),
            status = %record.status,
            latency = %record.latency_seconds,
            "audit row appended"
        );
        Ok(())
    }

    /// Read every row, in insertion order.
    ///
    /// # Errors
    ///
    /// Fails on a missing or unreadable file, a wrong header, a row with the
    /// wrong number of fields, or any field that does not parse.
    pub fn load_all(&self) -> Result<Vec<AuditRecord>, StoreError> {
        let file = File::open(self.path()).map_err(|source| self.io_error(source))?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(file);

        let headers = reader.headers()?;
        if !headers.iter().eq(HEADER.iter().copied()) {
            return Err(StoreError::HeaderMismatch {
                found: headers.iter().collect::<Vec<_>>().join(","),
            });
        }

        let mut records = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row = row?;
            let record = from_row(&row).map_err(|source| StoreError::MalformedRow {
                row: index + 1,
                source,
            })?;
            records.push(record);
        }

        tracing::debug!(path = %self.path().display(), rows = records.len(), "audit log loaded");
        Ok(records)
    }

    fn write_header(&self, file: File) -> Result<(), StoreError> {
        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(HEADER)?;
        writer.flush().map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path().to_path_buf(),
            source,
        }
    }
}

fn to_row(record: &AuditRecord) -> [String; 5] {
    [
        record.timestamp.to_table_string(),
        record.query.clone(),
        record.latency_seconds.to_table_string(),
        record.evidence_source.as_str().to_string(),
        record.status.as_str().to_string(),
    ]
}

fn from_row(row: &StringRecord) -> Result<AuditRecord, GraphGuardError> {
    // The reader rejects rows whose length differs from the header.
    Ok(AuditRecord {
        timestamp: Timestamp::parse(&row[0])?,
        query: row[1].to_string(),
        latency_seconds: row[2].parse::<Latency>()?,
        evidence_source: EvidenceSource::cited(&row[3]),
        status: row[4].parse::<Status>()?,
    })
}

/// Default location of the table under `dir`, for tests and tooling.
pub fn table_path_in(dir: &Path) -> PathBuf {
    dir.join("logs").join("product_metrics.csv")
}
