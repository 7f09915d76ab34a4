//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record persisted by the store.
//! - Validate raw user text before any create/update mutation.
//!
//! # Invariants
//! - `id` is stable for the task's lifetime and never reused.
//! - `text` is trimmed and non-empty in every stored task.
//! - `created_at` is assigned at creation and never changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Validation failure for raw task text.
///
/// This is expected user input, not a system fault; callers report it
/// synchronously and never log it as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Raw text was empty or whitespace-only after trimming.
    EmptyText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text required"),
        }
    }
}

impl Error for TaskValidationError {}

/// Trims raw user input and rejects empty results.
///
/// Every create/update path must pass its text through here before
/// touching the collection.
pub fn normalize_text(raw: &str) -> Result<String, TaskValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::EmptyText);
    }
    Ok(trimmed.to_string())
}

/// One to-do item.
///
/// Serialized field names match the persisted blob layout, so a
/// round-trip through storage preserves the record byte-for-byte in
/// meaning (`createdAt` keeps the external camelCase spelling).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable ID assigned at creation.
    pub id: TaskId,
    /// Trimmed, non-empty display text.
    pub text: String,
    /// Completion flag, starts `false`.
    pub completed: bool,
    /// Creation instant, immutable; persists as an ISO-8601 string.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task from already-normalized text.
    ///
    /// # Invariants
    /// - A fresh v4 ID is generated; callers must not fabricate IDs.
    /// - `completed` starts `false`, `created_at` is now.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            completed: false,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_text, Task, TaskValidationError};

    #[test]
    fn normalize_trims_surrounding_whitespace() {
        let text = normalize_text("  Buy milk \n").expect("non-empty text should pass");
        assert_eq!(text, "Buy milk");
    }

    #[test]
    fn normalize_rejects_empty_and_whitespace_only() {
        assert_eq!(normalize_text(""), Err(TaskValidationError::EmptyText));
        assert_eq!(normalize_text("   "), Err(TaskValidationError::EmptyText));
        assert_eq!(normalize_text("\t\n"), Err(TaskValidationError::EmptyText));
    }

    #[test]
    fn new_task_starts_incomplete_with_fresh_id() {
        let a = Task::new("one");
        let b = Task::new("two");
        assert!(!a.completed);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn validation_error_message_is_stable() {
        assert_eq!(TaskValidationError::EmptyText.to_string(), "task text required");
    }
}
