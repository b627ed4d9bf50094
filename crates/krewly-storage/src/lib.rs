//! # krewly-storage
//!
//! Key-value persistence primitives for the Krewly marketplace core.
//!
//! The higher layers (vendor applications, identity) never touch the
//! filesystem directly — they go through the [`KvStore`] trait, which models
//! the flat string-keyed namespace the reference client persists into. Two
//! implementations ship here:
//!
//! - [`MemoryKv`] — HashMap-backed, for tests and ephemeral sessions
//! - [`FileKv`] — one file per key in a namespace directory, with
//!   write-then-replace atomicity
//!
//! Both stores are single-writer: there is no locking or conflict detection,
//! and concurrent writers overwrite each other wholesale.

pub mod error;
pub mod file;
pub mod kv;
pub mod memory;

pub use error::StorageError;
pub use file::FileKv;
pub use kv::KvStore;
pub use memory::MemoryKv;
