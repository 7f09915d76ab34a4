//! In-memory blob storage for tests and embedding.

use crate::storage::{BlobStorage, StorageResult};
use std::cell::RefCell;

/// Blob storage holding the blob in process memory.
///
/// Execution is single-threaded and synchronous, so interior
/// mutability via `RefCell` is sufficient.
#[derive(Default)]
pub struct MemoryBlobStorage {
    blob: RefCell<Option<String>>,
}

impl MemoryBlobStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage pre-seeded with a blob, as if a previous
    /// session had persisted it.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: RefCell::new(Some(blob.into())),
        }
    }

    /// Returns a copy of the current blob, for assertions.
    pub fn snapshot(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

impl BlobStorage for MemoryBlobStorage {
    fn read(&self) -> StorageResult<Option<String>> {
        Ok(self.blob.borrow().clone())
    }

    fn write(&self, blob: &str) -> StorageResult<()> {
        *self.blob.borrow_mut() = Some(blob.to_string());
        Ok(())
    }
}
