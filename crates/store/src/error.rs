//! Store error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or writing the app data document.
///
/// Read-side errors never reach callers of the query operations; they are
/// logged and replaced by the seed. Write-side errors are returned.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document (or seed) is not valid JSON for the schema.
    #[error("malformed document {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document could not be encoded.
    #[error("failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The document could not be written or moved into place.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A background store task panicked or was cancelled.
    #[error("store task failed: {0}")]
    Task(String),
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;
