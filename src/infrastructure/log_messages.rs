//! Log message constants for infrastructure components
//!
//! This module centralizes all log messages used throughout the service
//! to ensure consistency and enable easy modification.

/// Application startup and lifecycle messages
pub mod application {
    pub const STARTING: &str = "Starting time progression service";
    pub const STARTING_SERVER: &str = "Binding HTTP listener";
    pub const STARTED_SUCCESSFULLY: &str = "Server started successfully";
    pub const SHUTTING_DOWN: &str = "Shutdown signal received";
    pub const SIGNAL_HANDLER_FAILED: &str = "Failed to install shutdown signal handler";
    pub const STOPPED: &str = "Server stopped";
}

/// Request/response processing messages
pub mod request_processing {
    pub const REQUEST_RECEIVED: &str = "Incoming request";
    pub const REQUEST_COMPLETED: &str = "Request completed";
    pub const REQUEST_FAILED: &str = "Request failed";
}

/// Configuration messages
pub mod configuration {
    pub const CONFIG_LOADED: &str = "Configuration loaded successfully";
    pub const INVALID_LOG_LEVEL: &str = "Invalid log level in configuration, using info";
}
