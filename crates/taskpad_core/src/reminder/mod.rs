//! Due-task reminders: capability contract, sweep, recurring scheduler.
//!
//! # Responsibility
//! - Define the permission-gated notification capability the engine needs.
//! - Sweep the canonical list for overdue, incomplete tasks.
//! - Own the cancellable recurring timer that drives periodic sweeps.
//!
//! # Invariants
//! - Reminders are emitted only while permission is exactly `Granted`.
//! - The sweep re-fires for every still-overdue incomplete task on every
//!   tick; the repetition is intentional observed behavior, not a bug in the
//!   sweep (see `sweep`).

use std::time::Duration;

pub mod notify;
pub mod scheduler;
pub mod sweep;

/// Fixed period between reminder sweeps.
pub const REMINDER_PERIOD: Duration = Duration::from_secs(60);
