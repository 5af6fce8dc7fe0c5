//! Error types for store operations.

use thiserror::Error;

/// Errors that can occur while persisting or reading log records.
#[derive(Debug, Error)]
pub enum Error {
    /// Native DB error.
    #[error("Database error: {0}")]
    Database(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Capture or assembly error from the core engine.
    #[error(transparent)]
    Audit(#[from] papertrail_core::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, Error>;
