//! Infrastructure layer: logging setup and shared log text

pub mod log_messages;
pub mod telemetry;
