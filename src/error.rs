//! Error types for the narrowing cache.

use thiserror::Error;

/// Frame stack errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    #[error("Frame stack underflow: the root frame cannot be popped")]
    Underflow,
}

/// Errors surfaced by the configuration and logging layers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<toml::ser::Error> for ApiError {
    fn from(err: toml::ser::Error) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
