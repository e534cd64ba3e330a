//! Core task-list engine for taskpad.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod engine;
pub mod logging;
pub mod model;
pub mod reminder;
pub mod store;
pub mod view;

pub use engine::runtime::EngineRuntime;
pub use engine::task_engine::{EditState, TaskDraft, TaskListEngine};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{parse_priority, Priority, Task, TaskId};
pub use reminder::notify::{Notifier, PermissionState};
pub use reminder::scheduler::ReminderScheduler;
pub use reminder::sweep::sweep_due_tasks;
pub use reminder::REMINDER_PERIOD;
pub use store::codec::{decode_tasks, encode_tasks, SnapshotError};
pub use store::snapshot_store::{
    MemorySnapshotStore, SnapshotStore, SqliteSnapshotStore, StoreError, StoreResult, SNAPSHOT_KEY,
};
pub use view::derive::{
    derive_view, parse_priority_filter, parse_status_filter, PriorityFilter, StatusFilter,
    ViewFilter,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
