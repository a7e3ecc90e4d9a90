//! # Metrics Subcommand
//!
//! Reloads the audit table and prints the summary: total audits, mean
//! responder latency, and the most recent rows. A table that cannot be read
//! prints a notice instead and still exits 0.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use gg_audit::{AuditConfig, AuditLogStore, MetricsView};

/// Arguments for the `graphguard metrics` subcommand.
#[derive(Args, Debug)]
pub struct MetricsArgs {
    /// Number of recent rows to list. Defaults to the configured tail.
    #[arg(long)]
    pub tail: Option<usize>,

    /// Print the summary as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute `graphguard metrics`.
pub fn run_metrics(args: &MetricsArgs, config: &AuditConfig, out: &mut dyn Write) -> Result<u8> {
    let tail = args.tail.unwrap_or(config.recent_tail);
    let store = AuditLogStore::new(config.clone());

    let view = MetricsView::from_load(store.load_all(), tail);

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?;
        return Ok(0);
    }

    match &view {
        MetricsView::Ready(summary) => {
            writeln!(out, "Total Audits: {}", summary.total_audits)?;
            writeln!(out, "Avg Latency:  {}", summary.mean_latency_display())?;
            writeln!(out)?;
            writeln!(out, "Recent Logs:")?;
            for r in &summary.recent {
                writeln!(
                    out,
                    "  {} | {} | {}s | {} | {}",
                    r.timestamp, r.query, r.latency_seconds, r.evidence_source, r.status
                )?;
            }
        }
        MetricsView::NoLogs => writeln!(out, "No logs yet.")?,
        MetricsView::Unavailable { reason } => writeln!(out, "No data available: {reason}")?,
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gg_audit::store::table_path_in;
    use gg_audit::AuditService;
    use gg_responder::KeywordResponder;

    fn metrics(config: &AuditConfig, tail: Option<usize>, json: bool) -> String {
        let mut out = Vec::new();
        let code = run_metrics(&MetricsArgs { tail, json }, config, &mut out).unwrap();
        assert_eq!(code, 0);
        String::from_utf8(out).unwrap()
    }

    fn seeded(dir: &tempfile::TempDir, n: usize) -> AuditConfig {
        let config = AuditConfig::with_log_file(table_path_in(dir.path()));
        let service = AuditService::open(config.clone(), KeywordResponder::nist()).unwrap();
        for i in 1..=n {
            service.submit(&format!("question {i}")).unwrap();
        }
        config
    }

    #[test]
    fn metrics_missing_table_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let config = AuditConfig::with_log_file(table_path_in(dir.path()));
        assert!(metrics(&config, None, false).starts_with("No data available:"));
    }

    #[test]
    fn metrics_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let config = seeded(&dir, 0);
        assert_eq!(metrics(&config, None, false).trim(), "No logs yet.");
    }

    #[test]
    fn metrics_lists_default_tail() {
        let dir = tempfile::tempdir().unwrap();
        let config = seeded(&dir, 7);
        let out = metrics(&config, None, false);
        assert!(out.contains("Total Audits: 7"));
        assert!(out.contains("Avg Latency:"));
        assert!(!out.contains("question 2 |"));
        assert!(out.contains("question 3 |"));
        assert!(out.contains("question 7 |"));
    }

    #[test]
    fn metrics_tail_override() {
        let dir = tempfile::tempdir().unwrap();
        let config = seeded(&dir, 4);
        let out = metrics(&config, Some(1), false);
        assert!(out.contains("Total Audits: 4"));
        assert!(!out.contains("question 3 |"));
        assert!(out.contains("question 4 |"));
    }

    #[test]
    fn metrics_json_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = seeded(&dir, 2);
        let json: serde_json::Value =
            serde_json::from_str(&metrics(&config, None, true)).unwrap();
        assert_eq!(json["state"], "ready");
        assert_eq!(json["total_audits"], 2);
        assert_eq!(json["recent"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn metrics_corrupt_table_degrades() {
        let dir = tempfile::tempdir().unwrap();
        let config = seeded(&dir, 1);
        std::fs::write(&config.log_file, "Timestamp,Query\n").unwrap();
        assert!(metrics(&config, None, false).starts_with("No data available:"));
    }
}
