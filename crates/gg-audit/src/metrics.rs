//! # Audit Metrics
//!
//! Aggregates over a full reload of the audit table: how many queries were
//! audited, their mean responder latency, and the most recent rows.
//!
//! The mean is undefined for an empty table. Rather than divide by zero,
//! an empty table produces [`MetricsView::NoLogs`], and a table that cannot
//! be read produces [`MetricsView::Unavailable`].

use gg_core::{AuditRecord, Latency};
use serde::Serialize;

use crate::error::StoreError;

/// Running count and latency sum.
///
/// Supports both a one-shot fold over a loaded table and incremental
/// maintenance as rows are appended.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LatencyAggregate {
    count: usize,
    sum_seconds: f64,
}

impl LatencyAggregate {
    /// An empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold every record's latency.
    pub fn from_records(records: &[AuditRecord]) -> Self {
        let mut agg = Self::new();
        for r in records {
            agg.record(r.latency_seconds);
        }
        agg
    }

    /// Add one observation.
    pub fn record(&mut self, latency: Latency) {
        self.count += 1;
        self.sum_seconds += latency.as_secs_f64();
    }

    /// Number of observations.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Arithmetic mean, or `None` when nothing has been recorded.
    pub fn mean_seconds(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum_seconds / self.count as f64)
        }
    }
}

/// The last `n` records in insertion order (all of them if fewer exist).
pub fn recent_tail(records: &[AuditRecord], n: usize) -> &[AuditRecord] {
    &records[records.len().saturating_sub(n)..]
}

/// Summary of a non-empty audit table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSummary {
    /// Number of audited queries.
    pub total_audits: usize,
    /// Mean responder latency in seconds.
    pub mean_latency_seconds: f64,
    /// Most recent rows, oldest first.
    pub recent: Vec<AuditRecord>,
}

impl MetricsSummary {
    /// Summarise `records`, or `None` when there are none.
    pub fn from_records(records: &[AuditRecord], tail: usize) -> Option<Self> {
        let agg = LatencyAggregate::from_records(records);
        let mean = agg.mean_seconds()?;
        Some(Self {
            total_audits: agg.count(),
            mean_latency_seconds: mean,
            recent: recent_tail(records, tail).to_vec(),
        })
    }

    /// Mean latency as shown in the sidebar, e.g. `0.123s`.
    pub fn mean_latency_display(&self) -> String {
        format!("{:.3}s", self.mean_latency_seconds)
    }
}

/// What the metrics panel shows after a reload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MetricsView {
    /// At least one row was loaded.
    Ready(MetricsSummary),
    /// The table exists and is readable but holds no rows.
    NoLogs,
    /// The table could not be read or parsed.
    Unavailable {
        /// Why the load failed.
        reason: String,
    },
}

impl MetricsView {
    /// Build the view for a successfully loaded table.
    pub fn from_records(records: &[AuditRecord], tail: usize) -> Self {
        match MetricsSummary::from_records(records, tail) {
            Some(summary) => Self::Ready(summary),
            None => Self::NoLogs,
        }
    }

    /// Build the view from the outcome of a reload. A failed load is logged
    /// and becomes [`MetricsView::Unavailable`].
    pub fn from_load(loaded: Result<Vec<AuditRecord>, StoreError>, tail: usize) -> Self {
        match loaded {
            Ok(records) => Self::from_records(&records, tail),
            Err(e) => {
                tracing::warn!(error = %e, "audit log unreadable, metrics unavailable");
                Self::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// The summary, if one is available.
    pub fn summary(&self) -> Option<&MetricsSummary> {
        match self {
            Self::Ready(summary) => Some(summary),
            _ => None,
        }
    }
}
