//! # Audit Record
//!
//! One row of the audit table: what was asked, when, how long the
//! responder took, which evidence it cited, and how it ended. Records are
//! append-only; nothing in the workspace mutates one after it is written.

use serde::{Deserialize, Serialize};

use crate::latency::Latency;
use crate::status::Status;
use crate::temporal::Timestamp;

/// Literal stored in `Evidence_Source` when no evidence applies.
pub const NO_EVIDENCE: &str = "None";

/// Free-text evidence citation, or the `"None"` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvidenceSource(String);

impl EvidenceSource {
    /// A citation such as `nist_guidelines.pdf (Page 18)`.
    pub fn cited(citation: impl Into<String>) -> Self {
        Self(citation.into())
    }

    /// The sentinel meaning no evidence applies.
    pub fn none() -> Self {
        Self(NO_EVIDENCE.to_string())
    }

    /// Whether this is the `"None"` sentinel.
    pub fn is_none(&self) -> bool {
        self.0 == NO_EVIDENCE
    }

    /// The stored text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EvidenceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single audited query/response interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Wall-clock time of the request.
    pub timestamp: Timestamp,
    /// Raw user-submitted text.
    pub query: String,
    /// Responder duration.
    pub latency_seconds: Latency,
    /// Citation, or the `"None"` sentinel.
    pub evidence_source: EvidenceSource,
    /// Outcome label.
    pub status: Status,
}

impl AuditRecord {
    /// Assemble a record from its five columns.
    pub fn new(
        timestamp: Timestamp,
        query: impl Into<String>,
        latency_seconds: Latency,
        evidence_source: EvidenceSource,
        status: Status,
    ) -> Self {
        Self {
            timestamp,
            query: query.into(),
            latency_seconds,
            evidence_source,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_sentinel() {
        let e = EvidenceSource::none();
        assert!(e.is_none());
        assert_eq!(e.as_str(), "None");
        assert!(!EvidenceSource::cited("nist_guidelines.pdf (Page 18)").is_none());
    }

    #[test]
    fn test_record_json_shape() {
        let record = AuditRecord::new(
            Timestamp::parse("2026-01-15 12:00:00").unwrap(),
            "cake recipe",
            Latency::from_secs_f64(0.0001).unwrap(),
            EvidenceSource::none(),
            Status::Refusal,
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["timestamp"], "2026-01-15 12:00:00");
        assert_eq!(json["query"], "cake recipe");
        assert_eq!(json["latency_seconds"], 0.0001);
        assert_eq!(json["evidence_source"], "None");
        assert_eq!(json["status"], "Refusal");
    }
}
