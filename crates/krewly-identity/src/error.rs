// error.rs — Error types for the identity subsystem.

use thiserror::Error;

/// Errors that can occur while persisting the signed-in user.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// The storage backend failed.
    #[error(transparent)]
    Storage(#[from] krewly_storage::StorageError),

    /// Failed to serialize the user record for storage.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
