//! Centralized error handling.
//!
//! Provides a unified error type for the entire application. Configuration
//! problems are surfaced once, at startup, before any client is constructed.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Configuration
    #[error("missing required configuration: {0}")]
    MissingConfig(String),

    #[error("invalid configuration for {name}: {reason}")]
    InvalidConfig { name: String, reason: String },

    // External service errors
    #[error("HTTP client error")]
    Http(#[from] reqwest::Error),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience constructors
impl AppError {
    pub fn missing_config(name: impl Into<String>) -> Self {
        AppError::MissingConfig(name.into())
    }

    pub fn invalid_config(name: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::InvalidConfig {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
