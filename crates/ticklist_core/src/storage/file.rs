//! File-backed blob storage.
//!
//! One JSON file under a caller-chosen data directory plays the role
//! of the browser's local-storage slot: a single keyed text value,
//! replaced wholesale on every write.

use crate::storage::{BlobStorage, StorageResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name standing in for the local-storage key `todos`.
const BLOB_FILE_NAME: &str = "todos.json";

/// Blob storage persisting to `<data_dir>/todos.json`.
pub struct FileBlobStorage {
    path: PathBuf,
}

impl FileBlobStorage {
    /// Creates storage rooted at `data_dir`.
    ///
    /// The directory is created on first write, not here, so a
    /// read-only startup against a missing directory still loads as
    /// an empty collection.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(BLOB_FILE_NAME),
        }
    }

    /// Returns the blob file path, mainly for diagnostics.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BlobStorage for FileBlobStorage {
    fn read(&self) -> StorageResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, blob: &str) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, blob)?;
        Ok(())
    }
}
