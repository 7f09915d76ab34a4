//! Edit-mode state machine.
//!
//! # Responsibility
//! - Track which single task, if any, is currently under edit.
//! - Make the add-vs-update decision an explicit tagged variant
//!   instead of an optional reference the view has to interpret.
//!
//! # Invariants
//! - At most one task is under edit at any time.
//! - Transitions happen only through explicit intents; the machine
//!   has no terminal state.

use crate::model::task::TaskId;

/// Current edit mode.
///
/// `Editing(id)` may dangle after the target task is deleted; the
/// next submit resolves through the store's not-found branch and
/// resets the mode (see `TaskSession::submit`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorMode {
    /// No edit in progress; submits create new tasks.
    #[default]
    Idle,
    /// The task with this ID is under edit; submits update it.
    Editing(TaskId),
}

/// Holder of the edit mode.
#[derive(Debug, Default)]
pub struct Editor {
    mode: EditorMode,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current mode.
    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Returns the ID under edit, if any.
    pub fn editing_id(&self) -> Option<TaskId> {
        match self.mode {
            EditorMode::Idle => None,
            EditorMode::Editing(id) => Some(id),
        }
    }

    /// Enters edit mode for `id`, replacing any previous target.
    pub fn start_edit(&mut self, id: TaskId) {
        self.mode = EditorMode::Editing(id);
    }

    /// Leaves edit mode.
    ///
    /// Called on cancel, on successful update, and when a submit
    /// targets a task that no longer exists. A validation failure
    /// must NOT call this; the failed submit leaves the mode as-is.
    pub fn reset(&mut self) {
        self.mode = EditorMode::Idle;
    }
}
