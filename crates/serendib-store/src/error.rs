//! # Error Types
//!
//! Storage-layer errors for serendib-store.
//!
//! Note what is *not* here: malformed persisted cart data is not an error
//! (it recovers to an empty cart inside [`crate::cart_store`]), and unknown
//! product ids are not an error (silent no-op in the core). `StoreError`
//! covers only real environmental failures: the storage file cannot be
//! read, written, or located.

use std::path::PathBuf;
use thiserror::Error;

/// Storage operation failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying file I/O failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing a value for storage failed.
    #[error("storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// No platform app-data directory could be determined and no override
    /// path was provided.
    #[error("could not determine a storage directory")]
    NoStorageDir,

    /// The storage file path has no parent directory to create.
    #[error("invalid storage path: {0}")]
    InvalidPath(PathBuf),
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
