//! Error types for configuration and the update checker.
//!
//! This module defines custom error types using `thiserror` for precise
//! error handling. Validation failures are not here on purpose: they are
//! values ([`crate::models::ValidationFailure`]), returned to the host
//! inside a result rather than raised.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// A specialized Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while fetching release metadata.
#[derive(Error, Debug)]
pub enum UpdateError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Feed returned an error status code
    #[error("Update feed error (status {status})")]
    FeedError { status: u16 },

    /// Failed to parse the feed's JSON document
    #[error("JSON parse error: {0}")]
    JsonError(String),
}

/// A specialized Result type for update-checker operations.
pub type UpdateResult<T> = Result<T, UpdateError>;
