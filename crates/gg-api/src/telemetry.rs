//! # Operational Metrics
//!
//! Prometheus counters and histograms for the API process. These describe
//! the service itself and are separate from the audit-log summary served
//! at `/v1/audits/summary`.
//!
//! Recording is a no-op until [`install_recorder`] has been called, which
//! keeps tests free of global state.

use gg_core::{Latency, Status};
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

const AUDITS_TOTAL: &str = "graphguard_audits_total";
const REJECTED_TOTAL: &str = "graphguard_rejected_queries_total";
const RESPONDER_LATENCY: &str = "graphguard_responder_latency_seconds";

/// Install the global Prometheus recorder and describe every metric.
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    describe_counter!(AUDITS_TOTAL, "Queries answered and appended to the audit log.");
    describe_counter!(REJECTED_TOTAL, "Queries rejected as empty before reaching the responder.");
    describe_histogram!(RESPONDER_LATENCY, "Responder latency in seconds.");
    Ok(handle)
}

/// Count one audited query.
pub fn record_audit(status: Status, latency: Latency) {
    counter!(AUDITS_TOTAL, "status" => status.as_str()).increment(1);
    histogram!(RESPONDER_LATENCY).record(latency.as_secs_f64());
}

/// Count one empty-query rejection.
pub fn record_rejection() {
    counter!(REJECTED_TOTAL).increment(1);
}
