// kv.rs — The KvStore trait: the flat string-keyed namespace abstraction.

use crate::error::StorageError;

/// Trait for a flat string-keyed value store.
///
/// This is the seam between the domain crates and whatever actually holds the
/// bytes. Keys are opaque identifiers (e.g. `krewly_vendor_applications`);
/// values are whatever the caller serialized — typically JSON, but the store
/// does not care.
///
/// Implementations must treat a missing key as `Ok(None)`, never an error.
pub trait KvStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value under `key`. Deleting a missing key is a no-op.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
