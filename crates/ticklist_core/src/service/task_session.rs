//! Task session: the single intent surface for a view.
//!
//! # Responsibility
//! - Route the dual-purpose submit intent to add or update based on
//!   the explicit editor mode.
//! - Expose read-only projections the view pulls after each intent.
//!
//! # Invariants
//! - Views must not mutate tasks or editor mode directly; every
//!   mutation flows through an intent here.
//! - Execution is single-threaded and synchronous; each intent runs
//!   to completion before the next is processed.

use crate::editor::{Editor, EditorMode};
use crate::model::task::{Task, TaskId};
use crate::storage::BlobStorage;
use crate::store::task_store::{StoreResult, TaskCounts, TaskStore};

/// What a submit intent resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new task was appended.
    Added(TaskId),
    /// The task under edit was rewritten in place.
    Updated(TaskId),
    /// The edit target vanished before submit; the input was
    /// discarded and the editor reset.
    Discarded,
}

/// Store plus editor behind one intent surface.
pub struct TaskSession<S: BlobStorage> {
    store: TaskStore<S>,
    editor: Editor,
}

impl<S: BlobStorage> TaskSession<S> {
    /// Opens a session over `storage`, loading any persisted tasks.
    pub fn open(storage: S) -> StoreResult<Self> {
        Ok(Self {
            store: TaskStore::open(storage)?,
            editor: Editor::new(),
        })
    }

    /// Dual-purpose submit: adds when idle, updates when editing.
    ///
    /// # Contract
    /// - Validation failure (empty text) leaves both collection and
    ///   editor mode unchanged.
    /// - A successful update returns the editor to `Idle`.
    /// - An update whose target no longer exists discards the input,
    ///   returns the editor to `Idle` and reports `Discarded`; the
    ///   collection is untouched.
    pub fn submit(&mut self, raw: &str) -> StoreResult<SubmitOutcome> {
        match self.editor.mode() {
            EditorMode::Idle => {
                let id = self.store.add(raw)?;
                Ok(SubmitOutcome::Added(id))
            }
            EditorMode::Editing(id) => {
                let found = self.store.update(id, raw)?;
                self.editor.reset();
                if found {
                    Ok(SubmitOutcome::Updated(id))
                } else {
                    Ok(SubmitOutcome::Discarded)
                }
            }
        }
    }

    /// Flips completion on `id`; benign no-op when absent.
    pub fn toggle(&mut self, id: TaskId) -> StoreResult<bool> {
        self.store.toggle(id)
    }

    /// Deletes `id`; benign no-op when absent.
    ///
    /// Deliberately leaves the editor alone even when `id` is the
    /// task under edit: the open form keeps its local input rather
    /// than vanishing mid-keystroke, and the eventual submit resolves
    /// through the not-found branch above.
    pub fn delete(&mut self, id: TaskId) -> StoreResult<bool> {
        self.store.delete(id)
    }

    /// Enters edit mode for an existing task.
    ///
    /// Returns `false` and stays in the current mode when no task
    /// has `id`.
    pub fn start_edit(&mut self, id: TaskId) -> bool {
        if self.store.get(id).is_none() {
            return false;
        }
        self.editor.start_edit(id);
        true
    }

    /// Leaves edit mode, discarding any pending input.
    pub fn cancel_edit(&mut self) {
        self.editor.reset();
    }

    /// Ordered task projection.
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// Total/completed/active counters.
    pub fn counts(&self) -> TaskCounts {
        self.store.counts()
    }

    /// True iff no tasks exist (drives the empty-state message).
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Current editor mode.
    pub fn mode(&self) -> EditorMode {
        self.editor.mode()
    }

    /// The task under edit, for form pre-fill.
    ///
    /// `None` when idle, and also when the edit target has been
    /// deleted out from under the editor.
    pub fn editing_task(&self) -> Option<&Task> {
        self.editor.editing_id().and_then(|id| self.store.get(id))
    }
}
