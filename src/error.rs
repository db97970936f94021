//! Error types for auto-push operations.
//!
//! This module defines [`AutoPushError`], the error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every error is terminal for the current invocation; `main` reports it
//!   and exits non-zero
//! - Use `AutoPushError::Other` (via `anyhow`) for unexpected errors
//! - Declining a confirmation prompt is not an error

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for auto-push operations.
#[derive(Debug, Error)]
pub enum AutoPushError {
    /// The credential file could not be opened, read or written.
    #[error("Failed to access credential file {path}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required credential is not set in the environment or credential file.
    #[error("{name} is not set. Run 'auto-push config' to set it.")]
    MissingCredential { name: String },

    /// A remote service failed or answered with an error.
    #[error("{}", format_remote(.status, .message))]
    Remote { status: Option<u16>, message: String },

    /// A remote service answered with an unexpected shape.
    #[error("Unexpected response: {message}")]
    MalformedResponse { message: String },

    /// An operator-provided value is unusable.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn format_remote(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("Remote service returned HTTP {}: {}", code, message),
        None => format!("Remote service request failed: {}", message),
    }
}

impl AutoPushError {
    /// Shorthand for an [`AutoPushError::InvalidInput`].
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Shorthand for an [`AutoPushError::MalformedResponse`].
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }
}

/// Result type alias for auto-push operations.
pub type Result<T> = std::result::Result<T, AutoPushError>;
