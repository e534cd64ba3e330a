//! Snapshot wire codec.
//!
//! # Responsibility
//! - Serialize the canonical list for storage.
//! - Decode persisted values with a strict shape check.
//!
//! # Invariants
//! - Decoding accepts only a sequence of task-shaped records; any element
//!   failing the check rejects the whole snapshot, never a partial list.

use crate::model::task::Task;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CodecResult<T> = Result<T, SnapshotError>;

/// Codec error for snapshot encode/decode.
#[derive(Debug)]
pub enum SnapshotError {
    Encode(String),
    Malformed(String),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(message) => write!(f, "cannot encode snapshot: {message}"),
            Self::Malformed(message) => write!(f, "malformed snapshot: {message}"),
        }
    }
}

impl Error for SnapshotError {}

/// Serializes the canonical list into one snapshot value.
pub fn encode_tasks(tasks: &[Task]) -> CodecResult<String> {
    serde_json::to_string(tasks).map_err(|err| SnapshotError::Encode(err.to_string()))
}

/// Decodes one persisted snapshot value into a task list.
///
/// The value must be a JSON array whose elements carry `id`, `text`, `done`,
/// `dueDate` and `priority` of the expected shapes.
pub fn decode_tasks(raw: &str) -> CodecResult<Vec<Task>> {
    serde_json::from_str::<Vec<Task>>(raw).map_err(|err| SnapshotError::Malformed(err.to_string()))
}
