//! Cancellable recurring tick resource.
//!
//! # Responsibility
//! - Run a callback on a fixed period from a dedicated worker thread.
//! - Guarantee deterministic release: stop signals the worker and joins it.
//!
//! # Invariants
//! - At most one worker exists per scheduler instance.
//! - After `stop` returns (or drop completes), no further tick runs.

use crossbeam_channel::{bounded, RecvTimeoutError, Sender};
use log::warn;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Recurring timer owned by the engine runtime.
///
/// The worker ticks the callback every `period` until stopped. Dropping the
/// scheduler also stops it, so the subscription cannot leak across
/// re-initialization.
pub struct ReminderScheduler {
    stop_tx: Sender<()>,
    worker: Option<JoinHandle<()>>,
}

impl ReminderScheduler {
    /// Starts the recurring tick worker.
    pub fn start<F>(period: Duration, mut tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (stop_tx, stop_rx) = bounded::<()>(1);
        let worker = thread::spawn(move || loop {
            match stop_rx.recv_timeout(period) {
                Err(RecvTimeoutError::Timeout) => tick(),
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });

        Self {
            stop_tx,
            worker: Some(worker),
        }
    }

    /// Stops the worker and waits for it to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };
        // A full buffer means a stop signal is already pending.
        let _ = self.stop_tx.try_send(());
        if worker.join().is_err() {
            warn!("event=scheduler_stop module=reminder status=error reason=worker_panic");
        }
    }
}

impl Drop for ReminderScheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}
