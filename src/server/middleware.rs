//! Middleware implementations for the HTTP layer

use crate::infrastructure::log_messages::request_processing;
use crate::server::types::REQUEST_ID_HEADER;
use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

fn new_request_id() -> HeaderValue {
    // Hyphenated UUIDs are plain ASCII
    HeaderValue::from_str(&Uuid::now_v7().to_string())
        .unwrap_or_else(|_| HeaderValue::from_static("unknown"))
}

/// Request ID middleware - ensures every request has a unique ID for tracing
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|existing| existing.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .and_then(|uuid| HeaderValue::from_str(&uuid.to_string()).ok())
        .unwrap_or_else(new_request_id);

    request
        .headers_mut()
        .insert(REQUEST_ID_HEADER, request_id.clone());

    let mut response = next.run(request).await;
    response.headers_mut().insert(REQUEST_ID_HEADER, request_id);

    response
}

/// Logging middleware - logs request/response details with timing
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    info!(
        request_id = request_id,
        method = %method,
        path = %uri.path(),
        "{}",
        request_processing::REQUEST_RECEIVED
    );

    let response = next.run(request).await;
    let duration = start.elapsed();
    let status = response.status();

    if status.is_success() {
        info!(
            request_id = request_id,
            method = %method,
            path = %uri.path(),
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "{}",
            request_processing::REQUEST_COMPLETED
        );
    } else {
        warn!(
            request_id = request_id,
            method = %method,
            path = %uri.path(),
            query = uri.query().unwrap_or(""),
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "{}",
            request_processing::REQUEST_FAILED
        );
    }

    response
}
