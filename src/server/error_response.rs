//! Unified error response handling for the HTTP layer
//!
//! Every failure leaves the service as the same JSON shape, correlated with
//! the request id assigned by the middleware.

use crate::error::Error;
use crate::server::types::REQUEST_ID_HEADER;
use axum::{
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Standard error response format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Unique error code for programmatic handling
    pub code: String,
    /// Request ID for correlation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            request_id: None,
        }
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Convert to HTTP response with proper headers
    pub fn into_response_with_status(self, status: StatusCode) -> Response {
        let request_id = self.request_id.clone();
        let mut response = (status, Json(self)).into_response();

        if let Some(id) = request_id {
            if let Ok(header_value) = HeaderValue::from_str(&id) {
                response
                    .headers_mut()
                    .insert(REQUEST_ID_HEADER, header_value);
            }
        }

        response
    }
}

/// Extension trait for consistent error formatting
pub trait ErrorResponseExt {
    fn to_error_response(&self) -> ErrorResponse;

    fn status_code(&self) -> StatusCode;
}

impl ErrorResponseExt for Error {
    fn to_error_response(&self) -> ErrorResponse {
        match self {
            Error::InvalidTimezone(_) => {
                ErrorResponse::new("INVALID_TIMEZONE", "Invalid timezone")
            }
            Error::InvalidFormat(_) => {
                ErrorResponse::new("INVALID_FORMAT", "Invalid format method")
            }
            Error::Config(_) | Error::Io(_) => {
                ErrorResponse::new("INTERNAL_ERROR", "Internal server error")
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        self.to_error_response().into_response_with_status(status)
    }
}

/// An [`Error`] tied to the request it failed
#[derive(Debug)]
pub struct ApiError {
    error: Error,
    request_id: Option<String>,
}

impl ApiError {
    pub fn new(error: Error, headers: &HeaderMap) -> Self {
        Self {
            error,
            request_id: extract_request_id(headers),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.error.status_code();
        let mut response = self.error.to_error_response();
        if let Some(id) = self.request_id {
            response = response.with_request_id(id);
        }
        response.into_response_with_status(status)
    }
}

/// Helper to extract request ID from headers
pub fn extract_request_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string())
}
