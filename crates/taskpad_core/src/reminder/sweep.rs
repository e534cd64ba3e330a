//! Due-date sweep over the canonical list.

use crate::model::task::Task;
use crate::reminder::notify::{Notifier, PermissionState};
use chrono::NaiveDateTime;
use log::debug;

/// Emits one reminder for every incomplete task whose due moment has passed.
///
/// Skips silently unless the capability reports `Granted` at sweep time.
/// Not idempotent across invocations: a task that stays overdue and
/// incomplete is re-notified on every sweep, matching the observed behavior
/// this engine preserves. Returns the number of reminders emitted.
pub fn sweep_due_tasks<N: Notifier>(tasks: &[Task], now: NaiveDateTime, notifier: &mut N) -> usize {
    if notifier.permission() != PermissionState::Granted {
        return 0;
    }

    let mut emitted = 0;
    for task in tasks {
        if task.done {
            continue;
        }
        let Some(due) = task.due_moment() else {
            continue;
        };
        if due > now {
            continue;
        }

        notifier.notify(
            &format!("Reminder: {}", task.text),
            &format!("Due: {}", due.date().format("%Y-%m-%d")),
        );
        emitted += 1;
    }

    if emitted > 0 {
        debug!("event=reminder_sweep module=reminder status=ok emitted={emitted}");
    }
    emitted
}
