//! # gg-cli — CLI Tool for GraphGuard
//!
//! Provides the `graphguard` command-line interface over the same audit
//! table the API serves.
//!
//! ## Subcommands
//!
//! - `graphguard init` — Create the audit table if it is missing.
//! - `graphguard ask <QUERY>` — Answer a question and record it.
//! - `graphguard metrics` — Summarise the audit table.
//!
//! ```bash
//! graphguard ask "What are the requirements for AAL3?"
//! graphguard metrics --tail 10
//! graphguard --log-file /var/lib/graphguard/audit.csv metrics --json
//! ```

pub mod ask;
pub mod init;
pub mod metrics;

use std::path::Path;

use anyhow::{Context, Result};
use gg_audit::AuditConfig;

/// Exit code for input the service refuses to process.
pub const EXIT_INVALID_INPUT: u8 = 2;

/// Resolve the audit configuration from the global flags.
///
/// `--config` loads a YAML file; `--log-file` then overrides its table path.
pub fn load_config(config: Option<&Path>, log_file: Option<&Path>) -> Result<AuditConfig> {
    let mut audit = match config {
        Some(path) => AuditConfig::from_yaml_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => AuditConfig::default(),
    };
    if let Some(log_file) = log_file {
        audit.log_file = log_file.to_path_buf();
    }
    Ok(audit)
}
