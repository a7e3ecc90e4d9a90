//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! The audit service sits behind one `parking_lot::Mutex`. Each request
//! holds the lock for its whole interaction (answer, append, reload), so
//! this process never has two writers on the table at once. The lock is
//! only taken inside `spawn_blocking`, never across an `.await`.

use std::path::PathBuf;
use std::sync::Arc;

use gg_audit::{AuditConfig, AuditService, ConfigError, StoreError};
use gg_responder::{KeywordResponder, Responder};
use metrics_exporter_prometheus::PrometheusHandle;
use parking_lot::Mutex;

/// Responder type held by the server.
pub type DynResponder = Box<dyn Responder>;

/// Audit service as shared between handlers.
pub type SharedAuditService = Arc<Mutex<AuditService<DynResponder>>>;

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// TCP port to bind.
    pub port: u16,
    /// Audit table configuration.
    pub audit: AuditConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            audit: AuditConfig::default(),
        }
    }
}

impl AppConfig {
    /// Build configuration from the environment.
    ///
    /// - `PORT`: listen port, default 8080.
    /// - `GRAPHGUARD_CONFIG`: optional YAML file for [`AuditConfig`].
    /// - `GRAPHGUARD_LOG_FILE`: overrides the table path from the file.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let mut audit = match std::env::var_os("GRAPHGUARD_CONFIG") {
            Some(path) => AuditConfig::from_yaml_file(&PathBuf::from(path))?,
            None => AuditConfig::default(),
        };
        if let Some(log_file) = std::env::var_os("GRAPHGUARD_LOG_FILE") {
            audit.log_file = PathBuf::from(log_file);
        }

        Ok(Self { port, audit })
    }
}

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// The single audit service of this process.
    pub service: SharedAuditService,
    /// Prometheus render handle, when a recorder was installed.
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    /// Open the audit table and attach the keyword placeholder responder.
    pub fn new(config: &AppConfig) -> Result<Self, StoreError> {
        Self::with_responder(config.audit.clone(), Box::new(KeywordResponder::nist()))
    }

    /// Open the audit table with a specific responder.
    pub fn with_responder(audit: AuditConfig, responder: DynResponder) -> Result<Self, StoreError> {
        let service = AuditService::open(audit, responder)?;
        Ok(Self {
            service: Arc::new(Mutex::new(service)),
            prometheus: None,
        })
    }

    /// Attach a Prometheus handle for the `/metrics` endpoint.
    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }
}
