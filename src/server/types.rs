//! Wire types and constants for the HTTP layer

use serde::Deserialize;

/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Route paths
pub mod paths {
    pub const PROGRESSION: &str = "/";
    pub const TIMEZONES: &str = "/timezones";
    pub const SECONDS: &str = "/seconds";
    pub const HEALTH: &str = "/health";
}

/// Query string of the progression endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgressionQuery {
    /// Public timezone identifier, e.g. `Europe-Berlin`
    pub timezone: Option<String>,
    /// One of the configured format names
    pub format: Option<String>,
}

/// Query string of the elapsed-seconds endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecondsQuery {
    pub timezone: Option<String>,
}
