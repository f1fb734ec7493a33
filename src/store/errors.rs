//! # Store Errors
//!
//! Failures during connection acquisition, statement execution, or
//! commit. All of them surface as 500 responses carrying the
//! underlying message.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connection acquisition failed
    #[error("connection pool error: {0}")]
    Pool(String),

    /// Statement execution or commit failed; message passed through verbatim
    #[error("{0}")]
    Postgres(#[from] tokio_postgres::Error),
}
