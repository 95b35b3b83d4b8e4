//! Unified error type for the reconciliation core
//!
//! Nothing here is fatal: parse problems coerce to zero before they
//! ever become an error, sync failures are retained-state events, and
//! the only hard errors are submission validation violations.

use thiserror::Error;

/// Error type shared across the workspace
#[derive(Debug, Error)]
pub enum AppError {
    /// Submission validation violation (blocks submission, first wins)
    #[error("{message}")]
    Validation { message: String },

    /// Backend lookup rejected the request (e.g. no prior reading)
    #[error("{message}")]
    Lookup { message: String },

    /// Invalid request parameter
    #[error("Invalid request: {message}")]
    Invalid { message: String },
}

impl AppError {
    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a Lookup error
    pub fn lookup(message: impl Into<String>) -> Self {
        Self::Lookup {
            message: message.into(),
        }
    }

    /// Create an Invalid error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Get the human-readable message
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message } => message,
            Self::Lookup { message } => message,
            Self::Invalid { message } => message,
        }
    }
}

/// Result type for core operations
pub type AppResult<T> = Result<T, AppError>;
