//! Task store: collection ownership, mutations and the persistence
//! round-trip.
//!
//! # Responsibility
//! - Provide the add/update/toggle/delete operations over the
//!   ordered collection.
//! - Serialize the full collection to the blob after every effective
//!   mutation and rebuild it from the blob at startup.
//!
//! # Invariants
//! - Collection order is insertion order; update/toggle/delete never
//!   reorder surviving tasks.
//! - A corrupted or absent blob loads as an empty collection and is
//!   never surfaced as an error.
//! - No-op mutations (not-found id) skip the persistence write, since
//!   the persisted content would be identical either way.

use crate::model::task::{normalize_text, Task, TaskId, TaskValidationError};
use crate::storage::{BlobStorage, StorageError};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for task mutations.
#[derive(Debug)]
pub enum StoreError {
    /// Rejected user input; the collection is unchanged.
    Validation(TaskValidationError),
    /// Transport failure while writing the persisted blob.
    Storage(StorageError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Read-only counters derived from the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCounts {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
}

/// Owner of the ordered task collection and its persisted blob.
pub struct TaskStore<S: BlobStorage> {
    storage: S,
    tasks: Vec<Task>,
}

impl<S: BlobStorage> TaskStore<S> {
    /// Opens a store, rebuilding the collection from the blob.
    ///
    /// # Contract
    /// - Absent blob loads as an empty collection.
    /// - Unparseable blob loads as an empty collection; corruption is
    ///   swallowed with a warning, never raised.
    /// - A transport failure reading an existing blob is still an
    ///   error, since silently discarding readable data would lose it
    ///   on the next persist.
    pub fn open(storage: S) -> StoreResult<Self> {
        let tasks = match storage.read()? {
            None => Vec::new(),
            Some(blob) => match serde_json::from_str::<Vec<Task>>(&blob) {
                Ok(tasks) => tasks,
                Err(err) => {
                    warn!("event=blob_corrupt module=store status=recovered reason={err}");
                    Vec::new()
                }
            },
        };

        Ok(Self { storage, tasks })
    }

    /// Appends a new task from raw user text.
    ///
    /// Trims the text first; empty results fail validation with the
    /// collection untouched. Persists on success.
    pub fn add(&mut self, raw: &str) -> StoreResult<TaskId> {
        let text = normalize_text(raw)?;
        let task = Task::new(text);
        let id = task.id;
        self.tasks.push(task);
        self.persist()?;
        debug!("event=task_added module=store id={id}");
        Ok(id)
    }

    /// Replaces the text of the task with `id` in place.
    ///
    /// Returns `Ok(false)` without writing when no task has `id`;
    /// this defends against an edit racing a deletion. Validation
    /// runs before the lookup, so empty text fails even for a
    /// vanished target.
    pub fn update(&mut self, id: TaskId, raw: &str) -> StoreResult<bool> {
        let text = normalize_text(raw)?;
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(false);
        };
        task.text = text;
        self.persist()?;
        debug!("event=task_updated module=store id={id}");
        Ok(true)
    }

    /// Flips the completion flag of the task with `id`.
    ///
    /// Returns `Ok(false)` without writing when no task has `id`.
    pub fn toggle(&mut self, id: TaskId) -> StoreResult<bool> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(false);
        };
        task.completed = !task.completed;
        let completed = task.completed;
        self.persist()?;
        debug!("event=task_toggled module=store id={id} completed={completed}");
        Ok(true)
    }

    /// Removes the task with `id`, preserving the relative order of
    /// the rest.
    ///
    /// Returns `Ok(false)` without writing when no task has `id`.
    pub fn delete(&mut self, id: TaskId) -> StoreResult<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }
        self.persist()?;
        debug!("event=task_deleted module=store id={id}");
        Ok(true)
    }

    /// Returns the collection in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up one task by ID.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Derives the total/completed/active counters.
    pub fn counts(&self) -> TaskCounts {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|task| task.completed).count();
        TaskCounts {
            total,
            completed,
            active: total - completed,
        }
    }

    /// True iff the collection holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Serializes the full collection and replaces the blob.
    fn persist(&self) -> StoreResult<()> {
        // Vec<Task> serialization cannot fail; map the impossible
        // branch through the storage error path anyway.
        let blob = serde_json::to_string(&self.tasks)
            .map_err(|err| StorageError::Io(std::io::Error::other(err)))?;
        self.storage.write(&blob)?;
        Ok(())
    }
}
