//! # OpenAPI Specification Assembly
//!
//! Collects the utoipa-documented routes into one OpenAPI 3.1 document,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// OpenAPI document for the GraphGuard API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "GraphGuard API — Compliance Auditor",
        version = "0.1.0",
        description = "Answers regulatory-compliance questions and keeps an audit trail of every interaction.\n\nEvery answered query is appended to a CSV audit table (timestamp, query, latency, evidence, status). The summary endpoint reloads that table and reports the audit count, mean responder latency, and the most recent rows.\n\nHealth probes (`/health/*`) and `/metrics` are outside the versioned API.",
        license(name = "AGPL-3.0-or-later")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    ),
    paths(
        crate::routes::audits::submit_audit,
        crate::routes::audits::audit_summary,
    ),
    components(schemas(
        crate::routes::audits::SubmitAuditRequest,
        crate::routes::audits::SubmitAuditResponse,
        crate::routes::audits::AuditRecordBody,
        crate::routes::audits::MetricsBody,
        crate::routes::audits::MetricsState,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "audits", description = "Query submission and audit-log summary"),
    )
)]
pub struct ApiDoc;

/// Router serving the OpenAPI document.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
