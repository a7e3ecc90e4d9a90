//! # Audit Configuration
//!
//! Explicit configuration handed to [`AuditLogStore`](crate::AuditLogStore)
//! at construction. Loadable from YAML; absent keys take their defaults.
//!
//! ```yaml
//! log_file: logs/product_metrics.csv
//! recent_tail: 5
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default table location, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "logs/product_metrics.csv";

/// Default number of recent rows in the metrics summary.
pub const DEFAULT_RECENT_TAIL: usize = 5;

/// Where the audit table lives and how much of it the summary shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuditConfig {
    /// Path of the CSV table.
    pub log_file: PathBuf,
    /// Rows listed in the recent-entries tail.
    pub recent_tail: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            recent_tail: DEFAULT_RECENT_TAIL,
        }
    }
}

impl AuditConfig {
    /// Default configuration pointing at `log_file`.
    pub fn with_log_file(log_file: impl Into<PathBuf>) -> Self {
        Self {
            log_file: log_file.into(),
            ..Self::default()
        }
    }

    /// Parse a YAML document. An empty document yields the defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a YAML config file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }
}
