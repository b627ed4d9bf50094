// file.rs — File-backed KvStore: one file per key in a namespace directory.
//
// Writes go through a temp file in the same directory and are moved into
// place with a rename, so a crash mid-write leaves the prior value intact.
// That rename is the only atomicity this store provides.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::StorageError;
use crate::kv::KvStore;

/// Durable [`KvStore`] storing each key as a file under one directory.
///
/// Keys are used verbatim as file names, so they must be valid path
/// components (the Krewly keys are plain `snake_case` identifiers).
#[derive(Debug)]
pub struct FileKv {
    dir: PathBuf,
}

impl FileKv {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            path: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// The namespace directory this store writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KvStore for FileKv {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(&path).map_err(|source| StorageError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Some(value))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.key_path(key);

        // Temp file in the same directory so the final rename stays on one
        // filesystem.
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.display().to_string(),
            source,
        })?;
        tmp.write_all(value.as_bytes())
            .map_err(|source| StorageError::Io {
                path: path.display().to_string(),
                source,
            })?;
        tmp.persist(&path).map_err(|e| StorageError::Io {
            path: path.display().to_string(),
            source: e.error,
        })?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(());
        }
        fs::remove_file(&path).map_err(|source| StorageError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(())
    }
}
