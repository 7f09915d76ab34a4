//! Use-case services for view-facing callers.
//!
//! # Responsibility
//! - Orchestrate store and editor into one intent surface.
//! - Keep any rendering layer decoupled from mutation details.

pub mod task_session;
