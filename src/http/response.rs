//! Uniform response envelopes.
//!
//! Every handler-level reply goes through one of the three responders here,
//! exactly once per request, so clients can parse all API responses the same
//! way. `Option` fields carry `skip_serializing_if`, keeping "absent"
//! distinct from `null` on the wire.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::http::middleware::RequestId;

/// Stable machine-readable code for faults caught by the recovery middleware.
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

/// Stable machine-readable code for a failed readiness probe.
pub const NOT_READY: &str = "NOT_READY";

/// Stable machine-readable code for rejected caller input.
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";

#[derive(Debug, Serialize)]
struct SuccessBody<T: Serialize> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    meta: Meta,
}

#[derive(Debug, Serialize)]
struct Meta {
    timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: ErrorDetail,
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
    metadata: Meta,
}

#[derive(Debug, Serialize)]
struct PaginatedBody<T: Serialize> {
    success: bool,
    data: Vec<T>,
    pagination: Pagination,
}

#[derive(Debug, Serialize)]
struct Pagination {
    page: u32,
    limit: u32,
    total: u64,
    total_pages: u64,
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn meta(request_id: Option<&RequestId>) -> Meta {
    Meta {
        timestamp: timestamp(),
        request_id: request_id.map(|id| id.as_str().to_string()),
    }
}

/// Reply with a success envelope.
///
/// `request_id` is absent when no correlation context exists, e.g. in unit
/// tests that bypass the middleware chain.
pub fn respond_success<T: Serialize>(
    status: StatusCode,
    request_id: Option<&RequestId>,
    data: Option<T>,
    message: Option<&str>,
) -> Response {
    debug_assert!(status.is_success() || status.is_redirection());

    let body = SuccessBody {
        success: true,
        data,
        message: message.map(str::to_string),
        meta: meta(request_id),
    };
    (status, Json(body)).into_response()
}

/// Reply with an error envelope.
///
/// `code` is a stable uppercase-snake machine token; `message` is
/// human-readable and may change without notice. `details` carries arbitrary
/// structured diagnostics and is omitted when `None`.
pub fn respond_error(
    status: StatusCode,
    request_id: Option<&RequestId>,
    code: &str,
    message: &str,
    details: Option<Value>,
) -> Response {
    debug_assert!(status.is_client_error() || status.is_server_error());

    let body = ErrorBody {
        success: false,
        error: ErrorDetail {
            code: code.to_string(),
            message: message.to_string(),
            details,
            metadata: meta(request_id),
        },
    };
    (status, Json(body)).into_response()
}

/// Reply with a paginated success envelope.
///
/// `total_pages` is the ceiling of `total / limit`. A `limit` of zero is a
/// caller bug and short-circuits to a 400 `VALIDATION_ERROR` before any
/// division happens.
pub fn respond_paginated<T: Serialize>(
    status: StatusCode,
    data: Vec<T>,
    page: u32,
    limit: u32,
    total: u64,
) -> Response {
    if limit == 0 {
        return respond_error(
            StatusCode::BAD_REQUEST,
            None,
            VALIDATION_ERROR,
            "limit must be greater than zero",
            None,
        );
    }

    let body = PaginatedBody {
        success: true,
        data,
        pagination: Pagination {
            page,
            limit,
            total,
            total_pages: total.div_ceil(limit as u64),
        },
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_success_envelope_shape() {
        let id = RequestId::new();
        let response = respond_success(
            StatusCode::OK,
            Some(&id),
            Some(json!({"answer": 42})),
            Some("done"),
        );
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"]["answer"], json!(42));
        assert_eq!(body["message"], json!("done"));
        assert_eq!(body["meta"]["request_id"], json!(id.as_str()));
        assert!(body["meta"]["timestamp"].is_string());
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn test_success_envelope_omits_absent_fields() {
        let response = respond_success::<Value>(StatusCode::CREATED, None, None, None);
        let body = body_json(response).await;

        assert!(body.get("data").is_none(), "data key must be absent");
        assert!(body.get("message").is_none());
        assert!(body["meta"].get("request_id").is_none());
    }

    #[tokio::test]
    async fn test_error_envelope_shape() {
        let response = respond_error(
            StatusCode::SERVICE_UNAVAILABLE,
            None,
            NOT_READY,
            "Database not ready",
            Some(json!({"dependency": "database"})),
        );
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = body_json(response).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"]["code"], json!("NOT_READY"));
        assert_eq!(body["error"]["details"]["dependency"], json!("database"));
        assert!(body["error"]["metadata"]["timestamp"].is_string());
        assert!(body.get("data").is_none(), "data key must be absent");
    }

    #[tokio::test]
    async fn test_pagination_ceiling_division() {
        for (total, limit, expected) in [(25u64, 10u32, 3u64), (20, 10, 2), (0, 10, 0), (1, 1, 1)] {
            let response =
                respond_paginated(StatusCode::OK, vec![json!("row")], 1, limit, total);
            let body = body_json(response).await;
            assert_eq!(
                body["pagination"]["total_pages"],
                json!(expected),
                "total={total} limit={limit}"
            );
            assert_eq!(body["pagination"]["total"], json!(total));
            assert_eq!(body["success"], json!(true));
        }
    }

    #[tokio::test]
    async fn test_pagination_rejects_zero_limit() {
        let response = respond_paginated(StatusCode::OK, vec![json!("row")], 1, 0, 10);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], json!("VALIDATION_ERROR"));
    }
}
