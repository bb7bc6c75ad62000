//! Route handlers
//!
//! Handlers only translate between HTTP and [`ProgressionService`]; every
//! decision about timezones and formats is made there.

use crate::application::ProgressionService;
use crate::domain::ProgressionResult;
use crate::server::error_response::ApiError;
use crate::server::types::{paths, ProgressionQuery, SecondsQuery};
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};

/// Build the router with every route, without middleware
pub fn routes(service: ProgressionService) -> Router {
    Router::new()
        .route(paths::PROGRESSION, get(progression_handler))
        .route(paths::TIMEZONES, get(timezones_handler))
        .route(paths::SECONDS, get(seconds_handler))
        .route(paths::HEALTH, get(health_handler))
        .with_state(service)
}

/// Percentages for the requested timezone, precise or simplified
async fn progression_handler(
    State(service): State<ProgressionService>,
    Query(query): Query<ProgressionQuery>,
    headers: HeaderMap,
) -> Result<Json<ProgressionResult>, ApiError> {
    service
        .compute_progression(query.timezone.as_deref(), None, query.format.as_deref())
        .map(Json)
        .map_err(|error| ApiError::new(error, &headers))
}

async fn timezones_handler(State(service): State<ProgressionService>) -> Json<Vec<String>> {
    Json(service.list_timezones())
}

/// Elapsed seconds of each period
async fn seconds_handler(
    State(service): State<ProgressionService>,
    Query(query): Query<SecondsQuery>,
    headers: HeaderMap,
) -> Result<Json<ProgressionResult>, ApiError> {
    service
        .elapsed_seconds(query.timezone.as_deref(), None)
        .map(Json)
        .map_err(|error| ApiError::new(error, &headers))
}

async fn health_handler() -> &'static str {
    "OK"
}
