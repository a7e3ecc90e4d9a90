//! # gg-core — Foundational Types for GraphGuard
//!
//! Every other crate in the workspace depends on `gg-core`; it depends on
//! nothing internal. It defines the vocabulary of the audit trail: one
//! [`AuditRecord`] per answered compliance question.
//!
//! ## Key Design Principles
//!
//! 1. **Newtypes for every column.** `Timestamp`, `Latency`, `EvidenceSource`
//!    and `Status` each own their textual form, so the on-disk table and the
//!    JSON API agree by construction.
//!
//! 2. **Closed `Status` enum.** Only `Success` and `Refusal` exist. Unknown
//!    labels are rejected at parse time instead of flowing into the log.
//!
//! 3. **Second-precision wall-clock timestamps.** Rendered as
//!    `YYYY-MM-DD HH:MM:SS`, no sub-seconds, no offset.
//!
//! 4. **Latency rounded at construction.** A `Latency` always carries at most
//!    four fractional digits and is never negative.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `gg-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod latency;
pub mod query;
pub mod record;
pub mod status;
pub mod temporal;

pub use error::GraphGuardError;
pub use latency::Latency;
pub use query::Query;
pub use record::{AuditRecord, EvidenceSource};
pub use status::Status;
pub use temporal::Timestamp;
