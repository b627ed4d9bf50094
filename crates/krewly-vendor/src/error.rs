// error.rs — Error types for the vendor application subsystem.

use thiserror::Error;

use crate::application::ApplicationStatus;
use crate::validate::ValidationErrors;

/// Errors that can occur while persisting or transitioning applications.
///
/// Expected conditions are not errors: a lookup or review against a missing
/// id returns `Ok(None)`, and malformed stored content reads as empty.
#[derive(Debug, Error)]
pub enum VendorError {
    /// The storage backend failed.
    #[error(transparent)]
    Storage(#[from] krewly_storage::StorageError),

    /// Failed to serialize application data for storage.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Attempted to review an application that is no longer pending.
    #[error("invalid transition from {from} to {to} for application {id}")]
    InvalidTransition {
        id: String,
        from: ApplicationStatus,
        to: ApplicationStatus,
    },
}

/// Errors returned by [`crate::store::ApplicationStore::submit`].
#[derive(Debug, Error)]
pub enum SubmitError {
    /// One or more fields failed validation. Nothing was persisted.
    /// The per-field messages are meant for inline display by the caller.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// The write-through to storage failed.
    #[error(transparent)]
    Store(#[from] VendorError),
}
