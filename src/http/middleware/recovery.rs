//! Panic recovery middleware.
//!
//! Outermost layer of the chain. Any unhandled fault downstream, including
//! one raised inside another middleware, is intercepted, logged with its
//! raw payload, and converted into a 500 `INTERNAL_ERROR` envelope. No
//! internal detail crosses the HTTP boundary, and the process keeps
//! serving other requests.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use axum::extract::Request;
use axum::http::{HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use futures_util::FutureExt;

use crate::http::middleware::logger::{RequestIdCell, X_REQUEST_ID};
use crate::http::response::{respond_error, INTERNAL_ERROR};

/// Recovery middleware.
///
/// Establishes a protected scope around the remainder of the chain;
/// guarantees every request receives exactly one terminal response even
/// when a downstream handler panics.
pub async fn recovery(mut request: Request, next: Next) -> Response {
    let cell = RequestIdCell::default();
    request.extensions_mut().insert(cell.clone());

    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(panic) => {
            let request_id = cell.get().cloned();
            tracing::error!(
                request_id = request_id.as_ref().map(|id| id.as_str()),
                panic = %panic_message(&panic),
                "request handler panicked"
            );

            let mut response = respond_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                request_id.as_ref(),
                INTERNAL_ERROR,
                "An unexpected error occurred",
                None,
            );
            // The logger's response path unwound with the panic, so the
            // header is restored here from the cell.
            if let Some(id) = request_id {
                if let Ok(value) = HeaderValue::from_str(id.as_str()) {
                    response.headers_mut().insert(X_REQUEST_ID, value);
                }
            }
            response
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
