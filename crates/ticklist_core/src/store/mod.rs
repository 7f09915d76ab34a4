//! Store layer owning the task collection and its persistence.
//!
//! # Responsibility
//! - Hold the ordered task collection as the single source of truth.
//! - Re-serialize and persist the full collection after every
//!   effective mutation.
//!
//! # Invariants
//! - No other component touches the persisted representation.
//! - Store writes validate task text before mutating the collection.
//! - Not-found targets are benign no-ops, not errors.

pub mod task_store;
