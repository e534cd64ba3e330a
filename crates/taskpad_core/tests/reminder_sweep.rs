use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::cell::RefCell;
use std::rc::Rc;
use taskpad_core::{
    sweep_due_tasks, MemorySnapshotStore, Notifier, PermissionState, Priority, Task,
    TaskListEngine,
};

struct RecordingNotifier {
    permission: PermissionState,
    posted: Rc<RefCell<Vec<(String, String)>>>,
}

impl RecordingNotifier {
    fn granted() -> (Self, Rc<RefCell<Vec<(String, String)>>>) {
        let posted = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                permission: PermissionState::Granted,
                posted: Rc::clone(&posted),
            },
            posted,
        )
    }

    fn with_permission(permission: PermissionState) -> Self {
        Self {
            permission,
            posted: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl Notifier for RecordingNotifier {
    fn permission(&self) -> PermissionState {
        self.permission
    }

    fn request_permission(&mut self) -> PermissionState {
        self.permission
    }

    fn notify(&mut self, summary: &str, body: &str) {
        self.posted
            .borrow_mut()
            .push((summary.to_string(), body.to_string()));
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
    date(y, m, d).and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap())
}

#[test]
fn sweep_notifies_overdue_incomplete_task() {
    let tasks = vec![Task::new(
        "water plants",
        Some(date(2026, 8, 1)),
        Priority::Medium,
    )];
    let (mut notifier, posted) = RecordingNotifier::granted();

    let emitted = sweep_due_tasks(&tasks, noon(2026, 8, 6), &mut notifier);

    assert_eq!(emitted, 1);
    let posted = posted.borrow();
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].0, "Reminder: water plants");
    assert_eq!(posted[0].1, "Due: 2026-08-01");
}

#[test]
fn sweep_fires_again_on_every_tick_while_overdue() {
    // Repeat reminders for a still-overdue task are the documented behavior,
    // not a one-shot per task.
    let tasks = vec![Task::new("nag me", Some(date(2026, 8, 1)), Priority::High)];
    let (mut notifier, posted) = RecordingNotifier::granted();

    assert_eq!(sweep_due_tasks(&tasks, noon(2026, 8, 6), &mut notifier), 1);
    assert_eq!(sweep_due_tasks(&tasks, noon(2026, 8, 6), &mut notifier), 1);

    assert_eq!(posted.borrow().len(), 2);
}

#[test]
fn sweep_fires_when_due_moment_equals_now() {
    let tasks = vec![Task::new("due now", Some(date(2026, 8, 6)), Priority::Low)];
    let (mut notifier, _posted) = RecordingNotifier::granted();

    let midnight = date(2026, 8, 6).and_time(NaiveTime::MIN);
    assert_eq!(sweep_due_tasks(&tasks, midnight, &mut notifier), 1);
}

#[test]
fn sweep_skips_completed_tasks() {
    let mut task = Task::new("already done", Some(date(2026, 8, 1)), Priority::Medium);
    task.done = true;
    let (mut notifier, posted) = RecordingNotifier::granted();

    assert_eq!(sweep_due_tasks(&[task], noon(2026, 8, 6), &mut notifier), 0);
    assert!(posted.borrow().is_empty());
}

#[test]
fn sweep_skips_tasks_without_due_date() {
    let tasks = vec![Task::new("undated", None, Priority::Medium)];
    let (mut notifier, posted) = RecordingNotifier::granted();

    assert_eq!(sweep_due_tasks(&tasks, noon(2026, 8, 6), &mut notifier), 0);
    assert!(posted.borrow().is_empty());
}

#[test]
fn sweep_skips_future_due_dates() {
    let tasks = vec![Task::new(
        "not yet",
        Some(date(2026, 8, 20)),
        Priority::Medium,
    )];
    let (mut notifier, posted) = RecordingNotifier::granted();

    assert_eq!(sweep_due_tasks(&tasks, noon(2026, 8, 6), &mut notifier), 0);
    assert!(posted.borrow().is_empty());
}

#[test]
fn sweep_emits_nothing_without_granted_permission() {
    let tasks = vec![Task::new(
        "silent",
        Some(date(2026, 8, 1)),
        Priority::Medium,
    )];

    for permission in [PermissionState::Denied, PermissionState::NotDetermined] {
        let mut notifier = RecordingNotifier::with_permission(permission);
        assert_eq!(sweep_due_tasks(&tasks, noon(2026, 8, 6), &mut notifier), 0);
        assert!(notifier.posted.borrow().is_empty());
    }
}

#[test]
fn engine_sweep_counts_only_matching_tasks() {
    let (notifier, posted) = RecordingNotifier::granted();
    let mut engine = TaskListEngine::start(MemorySnapshotStore::new(), notifier);

    engine.set_draft_text("overdue one");
    engine.set_draft_due_date(Some(date(2026, 8, 1)));
    engine.add_task().unwrap();

    engine.set_draft_text("overdue two");
    engine.set_draft_due_date(Some(date(2026, 8, 2)));
    engine.add_task().unwrap();

    engine.set_draft_text("future");
    engine.set_draft_due_date(Some(date(2027, 1, 1)));
    engine.add_task().unwrap();

    engine.set_draft_text("undated");
    engine.add_task().unwrap();

    let emitted = engine.sweep_reminders(noon(2026, 8, 6));

    assert_eq!(emitted, 2);
    assert_eq!(posted.borrow().len(), 2);
}
