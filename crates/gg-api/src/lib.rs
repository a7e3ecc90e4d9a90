//! # gg-api — Axum API Service for GraphGuard
//!
//! HTTP front end for the compliance auditor. A question posted to the API
//! is answered by the configured responder, appended to the audit table,
//! and returned together with a freshly reloaded summary.
//!
//! ## API Surface
//!
//! | Route                    | Module               | Purpose                  |
//! |--------------------------|----------------------|--------------------------|
//! | `POST /v1/audits`        | [`routes::audits`]   | Answer and record        |
//! | `GET /v1/audits/summary` | [`routes::audits`]   | Count, mean latency, tail |
//! | `GET /openapi.json`      | [`openapi`]          | OpenAPI 3.1 document     |
//! | `GET /health/liveness`   | here                 | Process is up            |
//! | `GET /health/readiness`  | here                 | Audit table is readable  |
//! | `GET /metrics`           | here                 | Prometheus scrape        |

pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod telemetry;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router.
///
/// Health probes and `/metrics` are mounted outside the `TraceLayer`.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::audits::router())
        .merge(openapi::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    let probes = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .route("/metrics", get(prometheus_metrics))
        .with_state(state);

    Router::new().merge(probes).merge(api)
}

/// GET /health/liveness — The process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// GET /health/readiness — The audit table can be loaded.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let service = state.service.clone();
    let loaded = tokio::task::spawn_blocking(move || {
        let service = service.lock();
        service.store().load_all()
    })
    .await;
    match loaded {
        Ok(Ok(_)) => (StatusCode::OK, "ready".to_string()),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "audit log unreadable".to_string(),
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "readiness task failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "readiness check failed".to_string(),
            )
        }
    }
}

/// GET /metrics — Prometheus text exposition.
async fn prometheus_metrics(State(state): State<AppState>) -> impl IntoResponse {
    match &state.prometheus {
        Some(handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        ),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            "metrics recorder not installed".to_string(),
        ),
    }
}
