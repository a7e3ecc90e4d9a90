//! # Audit Routes
//!
//! Submitting a query answers it, appends the interaction to the audit
//! table, then reloads the table so the response carries a fresh summary.
//! The summary route only reloads.
//!
//! File I/O runs on the blocking pool; the service mutex is taken there.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use gg_audit::{MetricsView, SubmitError, SubmitOutcome};
use gg_core::AuditRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::extractors::extract_json;
use crate::state::AppState;
use crate::telemetry;

// -- Request / Response DTOs ------------------------------------------------

/// Request to answer and audit one compliance question.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitAuditRequest {
    /// Free-text question. The empty string is rejected.
    pub query: String,
}

/// One row of the audit table.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuditRecordBody {
    /// Local wall-clock time, `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
    pub query: String,
    pub latency_seconds: f64,
    /// Cited document(s), or `"None"`.
    pub evidence_source: String,
    /// `"Success"` or `"Refusal"`.
    pub status: String,
}

impl From<&AuditRecord> for AuditRecordBody {
    fn from(r: &AuditRecord) -> Self {
        Self {
            timestamp: r.timestamp.to_table_string(),
            query: r.query.clone(),
            latency_seconds: r.latency_seconds.as_secs_f64(),
            evidence_source: r.evidence_source.as_str().to_string(),
            status: r.status.as_str().to_string(),
        }
    }
}

/// Availability of the audit summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MetricsState {
    Ready,
    NoLogs,
    Unavailable,
}

/// Audit log summary as shown next to the chat.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MetricsBody {
    pub state: MetricsState,
    /// Number of audited queries. Present when `state` is `ready`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_audits: Option<usize>,
    /// Mean responder latency in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_latency_seconds: Option<f64>,
    /// Mean latency formatted to three decimals, e.g. `0.123s`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_latency_display: Option<String>,
    /// Most recent rows, oldest first.
    #[serde(default)]
    pub recent: Vec<AuditRecordBody>,
    /// Notice shown instead of a summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<&MetricsView> for MetricsBody {
    fn from(view: &MetricsView) -> Self {
        let empty = |state, message: String| Self {
            state,
            total_audits: None,
            mean_latency_seconds: None,
            mean_latency_display: None,
            recent: Vec::new(),
            message: Some(message),
        };
        match view {
            MetricsView::Ready(summary) => Self {
                state: MetricsState::Ready,
                total_audits: Some(summary.total_audits),
                mean_latency_seconds: Some(summary.mean_latency_seconds),
                mean_latency_display: Some(summary.mean_latency_display()),
                recent: summary.recent.iter().map(AuditRecordBody::from).collect(),
                message: None,
            },
            MetricsView::NoLogs => empty(MetricsState::NoLogs, "No logs yet.".to_string()),
            // The reason carries the table path; it stays in the log.
            MetricsView::Unavailable { .. } => {
                empty(MetricsState::Unavailable, "No data available.".to_string())
            }
        }
    }
}

/// Answer plus the audit row written for it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitAuditResponse {
    /// The responder's finding.
    pub answer: String,
    pub record: AuditRecordBody,
    /// Summary reloaded after the append.
    pub metrics: MetricsBody,
}

/// Build the audits router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/audits", post(submit_audit))
        .route("/v1/audits/summary", get(audit_summary))
}

// -- Handlers ---------------------------------------------------------------

/// POST /v1/audits — Answer a question and record the interaction.
#[utoipa::path(
    post,
    path = "/v1/audits",
    request_body = SubmitAuditRequest,
    responses(
        (status = 200, description = "Answered and recorded", body = SubmitAuditResponse),
        (status = 422, description = "Empty query or malformed body", body = crate::error::ErrorBody),
        (status = 503, description = "Responder unavailable", body = crate::error::ErrorBody),
    ),
    tag = "audits"
)]
async fn submit_audit(
    State(state): State<AppState>,
    body: Result<Json<SubmitAuditRequest>, JsonRejection>,
) -> Result<Json<SubmitAuditResponse>, AppError> {
    let req = extract_json(body)?;
    let service = state.service.clone();

    let result = tokio::task::spawn_blocking(move || {
        let service = service.lock();
        let outcome = service.submit(&req.query)?;
        let view = service.metrics();
        Ok::<(SubmitOutcome, MetricsView), SubmitError>((outcome, view))
    })
    .await
    .map_err(|e| AppError::Internal(format!("audit task failed: {e}")))?;

    let (outcome, view) = match result {
        Ok(pair) => pair,
        Err(SubmitError::EmptyQuery) => {
            telemetry::record_rejection();
            return Err(SubmitError::EmptyQuery.into());
        }
        Err(e) => return Err(e.into()),
    };

    telemetry::record_audit(outcome.record.status, outcome.record.latency_seconds);

    Ok(Json(SubmitAuditResponse {
        answer: outcome.answer.text,
        record: AuditRecordBody::from(&outcome.record),
        metrics: MetricsBody::from(&view),
    }))
}

/// GET /v1/audits/summary — Reload the audit table and summarise it.
#[utoipa::path(
    get,
    path = "/v1/audits/summary",
    responses(
        (status = 200, description = "Current summary; `state` reports availability", body = MetricsBody),
    ),
    tag = "audits"
)]
async fn audit_summary(State(state): State<AppState>) -> Result<Json<MetricsBody>, AppError> {
    let service = state.service.clone();
    let view = tokio::task::spawn_blocking(move || {
        let service = service.lock();
        service.metrics()
    })
    .await
    .map_err(|e| AppError::Internal(format!("summary task failed: {e}")))?;
    Ok(Json(MetricsBody::from(&view)))
}
