//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical task record owned by the engine.
//! - Pin the snapshot wire format shared with persisted data.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Deletion is a hard removal from the canonical list; there are no
//!   tombstones.

pub mod task;
