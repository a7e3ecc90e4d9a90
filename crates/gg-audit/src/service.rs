//! # Audit Service
//!
//! Runs one interaction to completion: reject empty input, answer under a
//! timer, stamp the time, append one row. The metrics view is recomputed
//! from a full reload on every call to [`AuditService::metrics`].
//!
//! Empty input short-circuits before the responder is called, so no row is
//! written and no latency is measured.

use gg_core::{AuditRecord, Query, Timestamp};
use gg_responder::{answer_timed, Answer, Responder};

use crate::config::AuditConfig;
use crate::error::{StoreError, SubmitError};
use crate::metrics::MetricsView;
use crate::store::AuditLogStore;

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    /// What the responder said.
    pub answer: Answer,
    /// The row that was appended.
    pub record: AuditRecord,
}

/// Responder plus audit store.
#[derive(Debug)]
pub struct AuditService<R> {
    store: AuditLogStore,
    responder: R,
}

impl<R: Responder> AuditService<R> {
    /// Open the store (creating the table if needed) and attach a responder.
    ///
    /// # Errors
    ///
    /// Fails when the table cannot be initialised.
    pub fn open(config: AuditConfig, responder: R) -> Result<Self, StoreError> {
        let store = AuditLogStore::new(config);
        store.ensure_initialized()?;
        Ok(Self { store, responder })
    }

    /// The underlying store.
    pub fn store(&self) -> &AuditLogStore {
        &self.store
    }

    /// The attached responder.
    pub fn responder(&self) -> &R {
        &self.responder
    }

    /// Answer `query` and append the interaction to the audit log.
    pub fn submit(&self, query: &str) -> Result<SubmitOutcome, SubmitError> {
        let query = Query::new(query).map_err(|_| SubmitError::EmptyQuery)?;
        let timestamp = Timestamp::now();

        let timed = answer_timed(&self.responder, query.as_str())?;
        let record = AuditRecord::new(
            timestamp,
            query.into_inner(),
            timed.latency,
            timed.answer.evidence.clone(),
            timed.answer.status,
        );
        self.store.append(&record)?;

        tracing::info!(
            status = %record.status,
            latency = %record.latency_seconds,
            evidence = %record.evidence_source,
            "audit recorded"
        );
        Ok(SubmitOutcome {
            answer: timed.answer,
            record,
        })
    }

    /// Reload the table and summarise it. Never fails.
    pub fn metrics(&self) -> MetricsView {
        MetricsView::from_load(self.store.load_all(), self.store.config().recent_tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use gg_core::{EvidenceSource, Status};
    use gg_responder::{KeywordResponder, ResponderError};

    use crate::store::table_path_in;

    /// Counts calls, then delegates to the keyword responder.
    #[derive(Default)]
    struct CountingResponder {
        calls: AtomicUsize,
    }

    impl Responder for CountingResponder {
        fn answer(&self, query: &str) -> Result<Answer, ResponderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            KeywordResponder::nist().answer(query)
        }
    }

    struct OfflineResponder;

    impl Responder for OfflineResponder {
        fn answer(&self, _query: &str) -> Result<Answer, ResponderError> {
            Err(ResponderError::Unavailable("vector index offline".to_string()))
        }
    }

    fn service_in<R: Responder>(dir: &tempfile::TempDir, responder: R) -> AuditService<R> {
        AuditService::open(
            AuditConfig::with_log_file(table_path_in(dir.path())),
            responder,
        )
        .unwrap()
    }

    #[test]
    fn test_open_initializes_table() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(&dir, KeywordResponder::nist());
        assert!(service.store().path().exists());
        assert_eq!(service.metrics(), MetricsView::NoLogs);
    }

    #[test]
    fn test_aal3_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(&dir, KeywordResponder::nist());
        let outcome = service.submit("What are the requirements for AAL3?").unwrap();
        assert_eq!(outcome.record.status, Status::Success);
        assert!(outcome
            .record
            .evidence_source
            .as_str()
            .contains("nist_guidelines.pdf (Page 42)"));
        assert_eq!(outcome.record.query, "What are the requirements for AAL3?");

        let loaded = service.store().load_all().unwrap();
        assert_eq!(loaded, vec![outcome.record]);
    }

    #[test]
    fn test_cake_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(&dir, KeywordResponder::nist());
        let outcome = service.submit("cake recipe").unwrap();
        assert_eq!(outcome.record.status, Status::Refusal);
        assert_eq!(outcome.record.evidence_source, EvidenceSource::none());
    }

    #[test]
    fn test_empty_query_never_reaches_responder_or_log() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(&dir, CountingResponder::default());

        let err = service.submit("").unwrap_err();
        assert!(matches!(err, SubmitError::EmptyQuery));
        assert_eq!(err.to_string(), "Please enter a query.");

        assert_eq!(service.responder().calls.load(Ordering::SeqCst), 0);
        assert!(service.store().load_all().unwrap().is_empty());
    }

    #[test]
    fn test_whitespace_query_answered_by_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(&dir, CountingResponder::default());

        let outcome = service.submit("   ").unwrap();
        assert_eq!(outcome.record.status, Status::Success);
        assert_eq!(
            outcome.record.evidence_source.as_str(),
            "nist_guidelines.pdf (General Context)"
        );
        assert_eq!(service.responder().calls.load(Ordering::SeqCst), 1);

        let loaded = service.store().load_all().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].query, "   ");
    }

    #[test]
    fn test_responder_failure_logs_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(&dir, OfflineResponder);
        let err = service.submit("password policy").unwrap_err();
        assert!(matches!(err, SubmitError::Responder(_)));
        assert!(service.store().load_all().unwrap().is_empty());
    }

    #[test]
    fn test_metrics_after_submissions() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(&dir, KeywordResponder::nist());
        for i in 1..=7 {
            service.submit(&format!("question {i}")).unwrap();
        }
        let view = service.metrics();
        let summary = view.summary().unwrap();
        assert_eq!(summary.total_audits, 7);
        assert!(summary.mean_latency_seconds >= 0.0);
        let recent: Vec<_> = summary.recent.iter().map(|r| r.query.as_str()).collect();
        assert_eq!(
            recent,
            vec!["question 3", "question 4", "question 5", "question 6", "question 7"]
        );
    }

    #[test]
    fn test_metrics_degrade_on_corrupt_table() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(&dir, KeywordResponder::nist());
        std::fs::write(service.store().path(), "garbage\n").unwrap();
        assert!(matches!(service.metrics(), MetricsView::Unavailable { .. }));
    }

    #[test]
    fn test_open_fails_when_directory_blocked() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("logs"), "file in the way").unwrap();
        let result = AuditService::open(
            AuditConfig::with_log_file(table_path_in(dir.path())),
            KeywordResponder::nist(),
        );
        assert!(matches!(result, Err(StoreError::CreateDir { .. })));
    }
}
