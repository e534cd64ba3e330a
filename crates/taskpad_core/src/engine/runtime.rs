//! Engine runtime: shared handle plus the reminder timer lifecycle.
//!
//! # Responsibility
//! - Bind one engine to one recurring reminder scheduler.
//! - Serialize the single logical writer behind a mutex so user commands and
//!   timer ticks never overlap.
//!
//! # Invariants
//! - The scheduler is acquired on start and released on shutdown or drop;
//!   it never leaks across re-initialization.

use crate::engine::task_engine::TaskListEngine;
use crate::reminder::notify::Notifier;
use crate::reminder::scheduler::ReminderScheduler;
use crate::reminder::REMINDER_PERIOD;
use crate::store::snapshot_store::SnapshotStore;
use chrono::Local;
use log::info;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Composition root for a running engine.
pub struct EngineRuntime<S, N>
where
    S: SnapshotStore + Send + 'static,
    N: Notifier + Send + 'static,
{
    engine: Arc<Mutex<TaskListEngine<S, N>>>,
    reminders: Option<ReminderScheduler>,
}

impl<S, N> EngineRuntime<S, N>
where
    S: SnapshotStore + Send + 'static,
    N: Notifier + Send + 'static,
{
    /// Starts the engine and its 60-second reminder timer.
    pub fn start(store: S, notifier: N) -> Self {
        Self::start_with_period(store, notifier, REMINDER_PERIOD)
    }

    /// Starts with a custom sweep period. Tests use this to tick fast.
    pub fn start_with_period(store: S, notifier: N, period: Duration) -> Self {
        let engine = Arc::new(Mutex::new(TaskListEngine::start(store, notifier)));

        let sweep_target = Arc::clone(&engine);
        let reminders = ReminderScheduler::start(period, move || {
            if let Ok(mut engine) = sweep_target.lock() {
                engine.sweep_reminders(Local::now().naive_local());
            }
        });

        info!(
            "event=runtime_start module=engine status=ok period_ms={}",
            period.as_millis()
        );
        Self {
            engine,
            reminders: Some(reminders),
        }
    }

    /// Shared handle for issuing commands and reading state.
    pub fn engine(&self) -> Arc<Mutex<TaskListEngine<S, N>>> {
        Arc::clone(&self.engine)
    }

    /// Stops the reminder timer deterministically. Dropping the runtime has
    /// the same effect via the scheduler's own drop.
    pub fn shutdown(mut self) {
        if let Some(reminders) = self.reminders.take() {
            reminders.stop();
        }
        info!("event=runtime_stop module=engine status=ok");
    }
}
