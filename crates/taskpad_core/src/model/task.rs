//! Task domain model.
//!
//! # Responsibility
//! - Define the single entity the engine manages.
//! - Keep the snapshot wire shape stable: camelCase keys, `dueDate` encoded
//!   as `"YYYY-MM-DD"` or `""` when absent.
//!
//! # Invariants
//! - `id` is generated at creation and never reused for another task.
//! - `priority` is assigned at creation; no command edits it afterwards.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every task in the canonical list.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Urgency bucket assigned when a task is created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Stable string form used on the wire and in rendered views.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Parses one priority from user input. Case-insensitive.
pub fn parse_priority(value: &str) -> Option<Priority> {
    match value.trim().to_ascii_lowercase().as_str() {
        "high" => Some(Priority::High),
        "medium" => Some(Priority::Medium),
        "low" => Some(Priority::Low),
        _ => None,
    }
}

/// Canonical task record.
///
/// The engine owns the only mutable copy; readers work from the derived view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable global ID, unique within the list.
    pub id: TaskId,
    /// User-entered text. Non-empty after trimming at creation time; edits
    /// may later set any string, including empty.
    pub text: String,
    /// Completion flag. Orders the display but never the canonical list.
    pub done: bool,
    /// Optional calendar due date, compared against wall-clock time by the
    /// reminder sweep.
    #[serde(default, with = "due_date_wire")]
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
}

impl Task {
    /// Creates a task with a generated stable id and `done = false`.
    pub fn new(text: impl Into<String>, due_date: Option<NaiveDate>, priority: Priority) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            done: false,
            due_date,
            priority,
        }
    }

    /// Moment the task becomes due: midnight at the start of the due date.
    pub fn due_moment(&self) -> Option<NaiveDateTime> {
        self.due_date.map(|date| date.and_time(NaiveTime::MIN))
    }
}

/// Wire codec for `dueDate`: `"YYYY-MM-DD"` when set, `""` when absent.
///
/// A non-empty value that is not a valid calendar date is a decode error, so
/// a malformed snapshot is rejected whole instead of partially accepted.
mod due_date_wire {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const DATE_FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(Some)
            .map_err(|err| serde::de::Error::custom(format!("invalid due date `{trimmed}`: {err}")))
    }
}
