//! Core domain logic for Ticklist.
//! This crate is the single source of truth for task-list invariants.

pub mod editor;
pub mod logging;
pub mod model;
pub mod service;
pub mod storage;
pub mod store;

pub use editor::{Editor, EditorMode};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{normalize_text, Task, TaskId, TaskValidationError};
pub use service::task_session::{SubmitOutcome, TaskSession};
pub use storage::{BlobStorage, FileBlobStorage, MemoryBlobStorage, StorageError, StorageResult};
pub use store::task_store::{StoreError, StoreResult, TaskCounts, TaskStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
