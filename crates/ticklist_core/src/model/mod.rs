//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical task record and its input validation.
//! - Keep one shape shared by the store, the editor and persistence.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Task text is trimmed and non-empty before it reaches the store.

pub mod task;
