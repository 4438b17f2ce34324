//! Centralized error types for social operations.

use thiserror::Error;

/// Main error type for social operations.
#[derive(Error, Debug)]
pub enum SocialError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Graph store error: {0:#}")]
    Graph(#[from] anyhow::Error),
}

/// Result type for social operations.
pub type SocialResult<T> = Result<T, SocialError>;

impl SocialError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
