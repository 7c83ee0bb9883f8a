//! Request logging and correlation ids.

use std::convert::Infallible;
use std::fmt;
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use axum::extract::{FromRequestParts, Request};
use axum::http::request::Parts;
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

/// Response header carrying the correlation id back to the client.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Per-request correlation identifier.
///
/// Generated once at pipeline entry, attached to the request's extensions,
/// echoed in the `X-Request-ID` header and in envelope metadata. Never
/// shared across requests.
#[derive(Debug, Clone)]
pub struct RequestId(Arc<str>);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string().into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters, used to tag log lines.
    pub fn short(&self) -> &str {
        &self.0[..8]
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Write-once hand-off between the recovery and logger layers.
///
/// Recovery plants an empty cell before the id exists; the logger fills it.
/// When the downstream chain unwinds, recovery still has the id for the
/// error envelope and response header.
#[derive(Debug, Clone, Default)]
pub struct RequestIdCell(Arc<OnceLock<RequestId>>);

impl RequestIdCell {
    pub fn fill(&self, id: RequestId) {
        let _ = self.0.set(id);
    }

    pub fn get(&self) -> Option<&RequestId> {
        self.0.get()
    }
}

/// Extractor yielding the correlation id, when one exists.
///
/// Handlers invoked outside the middleware chain (unit tests) see `None`.
#[derive(Debug, Clone)]
pub struct CorrelationId(pub Option<RequestId>);

impl<S> FromRequestParts<S> for CorrelationId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(parts.extensions.get::<RequestId>().cloned()))
    }
}

/// Logging middleware.
///
/// Generates the correlation id, attaches it to the request and the
/// response header, then logs method, path, status and latency tagged with
/// the id's short prefix.
pub async fn logger(mut request: Request, next: Next) -> Response {
    let id = RequestId::new();
    if let Some(cell) = request.extensions().get::<RequestIdCell>() {
        cell.fill(id.clone());
    }
    request.extensions_mut().insert(id.clone());

    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(id.as_str()) {
        response.headers_mut().insert(X_REQUEST_ID, value);
    }

    tracing::info!(
        request_id = %id.short(),
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        latency = ?start.elapsed(),
        "request completed"
    );

    response
}
