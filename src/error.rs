use thiserror::Error;

/// Time progression service error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid format method: {0}")]
    InvalidFormat(String),
}

impl Error {
    /// Whether the caller can fix the request and try again
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidTimezone(_) | Self::InvalidFormat(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
