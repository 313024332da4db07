//! Unified error types and result handling.

use thiserror::Error;

/// Crate-wide error type.
///
/// Remote sync deliberately does not surface through this enum: the sync layer
/// is fail-open by contract and reports through [`crate::sync::SyncStatus`]
/// instead. Everything else propagates `Result<T>` in the usual way.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Remote API error: {status}: {message}")]
    RemoteApi { status: u16, message: String },

    #[error("{kind} not found: {id}")]
    RecordNotFound { kind: &'static str, id: String },

    #[error("Username already exists: {username}")]
    DuplicateUsername { username: String },

    #[error("Invalid amount: {amount}")]
    InvalidAmount { amount: f64 },

    #[error("Validation error: {message}")]
    Validation { message: String },
}

/// Convenience `Result` type.
pub type Result<T> = std::result::Result<T, Error>;
