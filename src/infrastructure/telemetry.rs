//! Tracing subscriber setup

use crate::config::LoggingSettings;
use crate::domain::config_types::LogFormat;
use crate::infrastructure::log_messages::configuration;
use std::error::Error as StdError;
use tracing_subscriber::EnvFilter;

const FALLBACK_LEVEL: &str = "info";

/// Build the event filter: `RUST_LOG` first, then the configured level
pub fn env_filter(settings: &LoggingSettings) -> (EnvFilter, bool) {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return (filter, true);
    }
    match EnvFilter::try_new(&settings.level) {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(FALLBACK_LEVEL), false),
    }
}

/// Install the global subscriber
///
/// # Errors
///
/// Fails when a global subscriber is already installed.
pub fn init_tracing(settings: &LoggingSettings) -> Result<(), Box<dyn StdError + Send + Sync>> {
    let (filter, level_valid) = env_filter(settings);
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match settings.format {
        LogFormat::Json => builder.json().try_init()?,
        LogFormat::Pretty => builder.pretty().try_init()?,
        LogFormat::Compact => builder.compact().try_init()?,
    }

    if !level_valid {
        tracing::warn!(level = %settings.level, "{}", configuration::INVALID_LOG_LEVEL);
    }
    Ok(())
}
