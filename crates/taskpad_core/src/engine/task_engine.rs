//! Task list engine: canonical state and command surface.
//!
//! # Responsibility
//! - Own the canonical task list and every mutation to it.
//! - Persist a snapshot after every list mutation (best effort).
//! - Drive the reminder sweep over the injected capabilities.
//!
//! # Invariants
//! - Task ids are unique within the list at all times.
//! - The canonical list keeps insertion order; display order is derived.
//! - Commands naming an unknown id are silent no-ops, never errors.
//! - A failed save never rolls back in-memory state; the in-memory list is
//!   the source of truth within a session.

use crate::model::task::{Priority, Task, TaskId};
use crate::reminder::notify::{Notifier, PermissionState};
use crate::reminder::sweep::sweep_due_tasks;
use crate::store::codec::{decode_tasks, encode_tasks};
use crate::store::snapshot_store::{SnapshotStore, SNAPSHOT_KEY};
use crate::view::derive::{derive_view, PriorityFilter, StatusFilter, ViewFilter};
use chrono::{NaiveDate, NaiveDateTime};
use log::{info, warn};

/// Pending new-task input fields, cleared after a successful add.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub text: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
}

/// Edit-mode state: at most one task is editable at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Viewing,
    Editing { id: TaskId, buffer: String },
}

/// The task list engine.
///
/// Holds the canonical list plus all input-side state (draft, filters, edit
/// buffer) and the two injected capabilities: a [`SnapshotStore`] and a
/// [`Notifier`]. All mutations run through this type; readers consume the
/// derived view.
pub struct TaskListEngine<S, N> {
    store: S,
    notifier: N,
    tasks: Vec<Task>,
    draft: TaskDraft,
    filter: ViewFilter,
    edit: EditState,
}

impl<S: SnapshotStore, N: Notifier> TaskListEngine<S, N> {
    /// Starts the engine over the injected capabilities.
    ///
    /// Requests notification permission once when the capability still
    /// reports [`PermissionState::NotDetermined`], then loads the persisted
    /// snapshot. Loading fails soft: absent, unreadable or malformed data
    /// yields an empty list and a warning-level event, never an error.
    pub fn start(store: S, mut notifier: N) -> Self {
        if notifier.permission() == PermissionState::NotDetermined {
            let result = notifier.request_permission();
            info!("event=permission_request module=engine status=ok result={result:?}");
        }

        let mut engine = Self {
            store,
            notifier,
            tasks: Vec::new(),
            draft: TaskDraft::default(),
            filter: ViewFilter::default(),
            edit: EditState::default(),
        };
        engine.load();
        engine
    }

    fn load(&mut self) {
        self.tasks = match self.store.get(SNAPSHOT_KEY) {
            Ok(Some(raw)) => match decode_tasks(&raw) {
                Ok(tasks) => {
                    info!(
                        "event=snapshot_load module=engine status=ok count={}",
                        tasks.len()
                    );
                    tasks
                }
                Err(err) => {
                    warn!("event=snapshot_load module=engine status=recovered reason=malformed error={err}");
                    Vec::new()
                }
            },
            Ok(None) => {
                info!("event=snapshot_load module=engine status=ok count=0 reason=absent");
                Vec::new()
            }
            Err(err) => {
                warn!("event=snapshot_load module=engine status=recovered reason=unreadable error={err}");
                Vec::new()
            }
        };
    }

    /// Persists the canonical list under the fixed snapshot key.
    ///
    /// Best effort: failures are logged at warning level, not retried, and
    /// never touch the in-memory list.
    fn save(&mut self) {
        let encoded = match encode_tasks(&self.tasks) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!("event=snapshot_save module=engine status=error reason=encode error={err}");
                return;
            }
        };
        if let Err(err) = self.store.set(SNAPSHOT_KEY, &encoded) {
            warn!("event=snapshot_save module=engine status=error reason=write error={err}");
        }
    }

    // Draft commands -----------------------------------------------------

    pub fn set_draft_text(&mut self, text: impl Into<String>) {
        self.draft.text = text.into();
    }

    pub fn set_draft_due_date(&mut self, due_date: Option<NaiveDate>) {
        self.draft.due_date = due_date;
    }

    pub fn set_draft_priority(&mut self, priority: Priority) {
        self.draft.priority = priority;
    }

    /// Adds a task from the current draft.
    ///
    /// Rejects (returns `None`, list and draft unchanged) when the trimmed
    /// draft text is empty. Otherwise appends a new task with a fresh id and
    /// `done = false` to the end of the canonical list, clears the draft back
    /// to defaults and returns the new id. The text is stored as entered,
    /// not trimmed.
    pub fn add_task(&mut self) -> Option<TaskId> {
        if self.draft.text.trim().is_empty() {
            return None;
        }

        let draft = std::mem::take(&mut self.draft);
        let task = Task::new(draft.text, draft.due_date, draft.priority);
        let id = task.id;
        self.tasks.push(task);
        self.save();
        Some(id)
    }

    // List commands ------------------------------------------------------

    /// Removes the task with matching id; no-op when absent.
    pub fn delete_task(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() != before {
            self.save();
        }
    }

    /// Flips the `done` flag of the matching task; no-op when absent.
    pub fn toggle_done(&mut self, id: TaskId) {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return;
        };
        task.done = !task.done;
        self.save();
    }

    // Edit mode ----------------------------------------------------------

    /// Enters edit mode for `id`, seeding the buffer with `current_text`.
    ///
    /// Entering edit for a different id discards any uncommitted buffer
    /// without saving it.
    pub fn begin_edit(&mut self, id: TaskId, current_text: impl Into<String>) {
        self.edit = EditState::Editing {
            id,
            buffer: current_text.into(),
        };
    }

    /// Replaces the edit buffer; no-op outside edit mode.
    pub fn set_edit_buffer(&mut self, text: impl Into<String>) {
        if let EditState::Editing { buffer, .. } = &mut self.edit {
            *buffer = text.into();
        }
    }

    /// Commits the edit buffer into the task matching `id`.
    ///
    /// The buffer is written as-is, even when empty; add-time validation
    /// deliberately does not apply here. Exits edit mode and clears the
    /// buffer whether or not the id still exists.
    pub fn commit_edit(&mut self, id: TaskId) {
        let EditState::Editing { buffer, .. } = std::mem::take(&mut self.edit) else {
            return;
        };
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.text = buffer;
            self.save();
        }
    }

    // Filter commands ----------------------------------------------------

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.search = term.into();
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filter.status = status;
    }

    pub fn set_priority_filter(&mut self, priority: PriorityFilter) {
        self.filter.priority = priority;
    }

    // Read surface -------------------------------------------------------

    /// The canonical, insertion-ordered list.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The derived view for the current filter parameters.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        derive_view(&self.tasks, &self.filter)
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    pub fn filter(&self) -> &ViewFilter {
        &self.filter
    }

    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    // Reminders ----------------------------------------------------------

    /// Runs one reminder sweep at `now`; see
    /// [`sweep_due_tasks`](crate::reminder::sweep::sweep_due_tasks).
    pub fn sweep_reminders(&mut self, now: NaiveDateTime) -> usize {
        let Self {
            tasks, notifier, ..
        } = self;
        sweep_due_tasks(tasks, now, notifier)
    }
}
