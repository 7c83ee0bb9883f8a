//! Cross-origin resource sharing.
//!
//! Fixed policy: any origin, the usual REST verbs, and the headers the
//! frontend sends. Preflight `OPTIONS` requests are answered directly by
//! the layer and never reach a handler.

use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

use crate::http::middleware::logger::X_REQUEST_ID;

pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, X_REQUEST_ID])
}
