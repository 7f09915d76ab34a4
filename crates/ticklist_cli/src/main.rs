//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `ticklist_core` linkage.
//! - Keep output deterministic for quick local sanity checks.
//!
//! This is not a task-management interface; the core is consumed by
//! embedding views, not by this binary.

fn main() {
    println!("ticklist_core ping={}", ticklist_core::ping());
    println!("ticklist_core version={}", ticklist_core::core_version());
}
