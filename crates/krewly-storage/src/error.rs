// error.rs — Error types for the storage primitives.

use thiserror::Error;

/// Errors that can occur in a key-value store backend.
///
/// Only backend-level failures surface here. A missing key is not an error —
/// reads return `Ok(None)`.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}
