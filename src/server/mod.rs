//! HTTP layer for the time progression service
//!
//! Thin axum wrapper around [`ProgressionService`]:
//!
//! - `GET /?timezone=Europe-Berlin&format=round` - progression record
//! - `GET /timezones` - every accepted timezone identifier
//! - `GET /seconds?timezone=Europe-Berlin` - elapsed seconds per period
//! - `GET /health` - liveness probe

pub mod error_response;
pub mod middleware;
pub mod routes;
pub mod types;

use crate::application::ProgressionService;
use axum::{middleware::from_fn, Router};

/// Router with all routes and the middleware stack applied
///
/// Middleware runs outer to inner: request id, then logging, so every log
/// line carries the id.
pub fn build_router(service: ProgressionService) -> Router {
    routes::routes(service)
        .layer(from_fn(middleware::logging_middleware))
        .layer(from_fn(middleware::request_id_middleware))
}

pub use error_response::{ApiError, ErrorResponse};
pub use types::REQUEST_ID_HEADER;
