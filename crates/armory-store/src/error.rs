//! Error types for the data layer.
//!
//! All errors are propagated via [`StoreError`] which wraps the underlying
//! [`fred`] and [`serde_json`] errors. Store faults are infrastructure
//! failures -- they are never surfaced to players as game-rule rejections.

/// Errors that can occur in the data layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A Redis operation failed.
    #[error("Redis error: {0}")]
    Redis(#[from] fred::error::Error),

    /// A serialization or deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
