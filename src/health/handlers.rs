//! Liveness and readiness handlers.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::json;

use crate::health::probe::run_probe;
use crate::http::middleware::CorrelationId;
use crate::http::response::{respond_error, respond_success, NOT_READY};
use crate::http::server::AppState;

/// Name under which the optional datastore is reported when it was never
/// initialized.
const DATASTORE: &str = "database";

const HEALTHY: &str = "healthy";
const UNHEALTHY: &str = "unhealthy";
const NOT_CONFIGURED: &str = "not_configured";

/// Snapshot reported by `GET /health`. Computed fresh per request.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub time: String,
    pub services: BTreeMap<String, String>,
}

/// `GET /health` — liveness. Always HTTP 200.
///
/// A dependency that was never configured is reported as
/// `not_configured` and does not downgrade the aggregate status.
pub async fn health(
    State(state): State<AppState>,
    CorrelationId(request_id): CorrelationId,
) -> Response {
    let mut services = BTreeMap::new();

    match state.dependency.as_ref() {
        Some(dependency) => {
            let verdict = match run_probe(dependency.as_ref(), state.probe_timeout).await {
                Ok(()) => HEALTHY,
                Err(err) => {
                    tracing::warn!(
                        dependency = dependency.name(),
                        error = %err,
                        "health probe failed"
                    );
                    UNHEALTHY
                }
            };
            services.insert(dependency.name().to_string(), verdict.to_string());
        }
        None => {
            services.insert(DATASTORE.to_string(), NOT_CONFIGURED.to_string());
        }
    }

    let status = if services.values().any(|verdict| verdict == UNHEALTHY) {
        UNHEALTHY
    } else {
        HEALTHY
    };

    respond_success(
        StatusCode::OK,
        request_id.as_ref(),
        Some(HealthStatus {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            time: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            services,
        }),
        None,
    )
}

/// `GET /ready` — readiness. Fails the call itself when unable to serve.
///
/// Returns 503 `NOT_READY` as soon as one configured dependency fails its
/// probe; no partial per-dependency report.
pub async fn ready(
    State(state): State<AppState>,
    CorrelationId(request_id): CorrelationId,
) -> Response {
    if let Some(dependency) = state.dependency.as_ref() {
        if let Err(err) = run_probe(dependency.as_ref(), state.probe_timeout).await {
            tracing::warn!(
                dependency = dependency.name(),
                error = %err,
                "readiness probe failed"
            );
            return respond_error(
                StatusCode::SERVICE_UNAVAILABLE,
                request_id.as_ref(),
                NOT_READY,
                "Database not ready",
                None,
            );
        }
    }

    respond_success(
        StatusCode::OK,
        request_id.as_ref(),
        Some(json!({"ready": true})),
        None,
    )
}
