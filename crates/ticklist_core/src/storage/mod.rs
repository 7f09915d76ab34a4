//! Persisted-blob storage boundary.
//!
//! # Responsibility
//! - Define the read/write contract for the single serialized blob.
//! - Keep filesystem details out of the store's collection logic.
//!
//! # Invariants
//! - The blob is replaced wholesale on every write; no patching.
//! - An absent blob reads as `Ok(None)`, never as an error.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod file;
mod memory;

pub use file::FileBlobStorage;
pub use memory::MemoryBlobStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport-level failure while reading or writing the blob.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Storage interface for the persisted task blob.
///
/// Implementations hold exactly one blob; content interpretation is
/// entirely the store's concern.
pub trait BlobStorage {
    /// Reads the current blob, `None` when nothing was ever written.
    fn read(&self) -> StorageResult<Option<String>>;

    /// Replaces the blob with `blob`, discarding any previous content.
    fn write(&self, blob: &str) -> StorageResult<()>;
}
