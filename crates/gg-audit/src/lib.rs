//! # gg-audit — Audit Log Store and Metrics
//!
//! Durable, append-only record of every query/response interaction,
//! queryable in aggregate for the metrics summary.
//!
//! ## Architecture
//!
//! - **Config** (`config.rs`): `AuditConfig` names the log file and the
//!   length of the recent-entries tail. Passed to the store at construction.
//!
//! - **Store** (`store.rs`): `AuditLogStore` owns the CSV table:
//!   `ensure_initialized()`, `append()`, `load_all()`. Every file handle is
//!   opened immediately before use and dropped on every exit path.
//!
//! - **Metrics** (`metrics.rs`): `MetricsView` summarises a full reload
//!   (count, mean latency, recent tail) and degrades to `Unavailable` when
//!   the table cannot be read.
//!
//! - **Service** (`service.rs`): `AuditService` runs one interaction end to
//!   end: validate, answer, time, append.
//!
//! ## Concurrency
//!
//! Single writer. Nothing here synchronises concurrent appends from several
//! processes; rows may interleave if two processes share one table.

pub mod config;
pub mod error;
pub mod metrics;
pub mod service;
pub mod store;

pub use config::AuditConfig;
pub use error::{ConfigError, StoreError, SubmitError};
pub use metrics::{LatencyAggregate, MetricsSummary, MetricsView};
pub use service::{AuditService, SubmitOutcome};
pub use store::{AuditLogStore, HEADER};
