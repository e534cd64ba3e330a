//! Derived display view over the canonical list.
//!
//! # Responsibility
//! - Compute the filtered, sorted sequence used for display.
//!
//! # Invariants
//! - Derivation is pure: identical inputs always give identical output, and
//!   the canonical list is never mutated.
//! - Sorting is stable; canonical order breaks ties within each group.

use crate::model::task::{parse_priority, Priority, Task};

/// Completion filter for the derived view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Done,
    NotDone,
}

/// Priority filter for the derived view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

/// Filter parameters applied by [`derive_view`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewFilter {
    /// Free-text search term; empty matches all.
    pub search: String,
    pub status: StatusFilter,
    pub priority: PriorityFilter,
}

/// Parses one status filter from user input.
pub fn parse_status_filter(value: &str) -> Option<StatusFilter> {
    match value.trim().to_ascii_lowercase().as_str() {
        "all" => Some(StatusFilter::All),
        "done" => Some(StatusFilter::Done),
        "notdone" => Some(StatusFilter::NotDone),
        _ => None,
    }
}

/// Parses one priority filter from user input.
pub fn parse_priority_filter(value: &str) -> Option<PriorityFilter> {
    if value.trim().eq_ignore_ascii_case("all") {
        return Some(PriorityFilter::All);
    }
    parse_priority(value).map(PriorityFilter::Only)
}

/// Computes the display sequence for the given filter parameters.
///
/// Keeps tasks whose text contains the search term case-insensitively, then
/// applies the status and priority filters, then stable-sorts incomplete
/// tasks before complete ones.
pub fn derive_view<'a>(tasks: &'a [Task], filter: &ViewFilter) -> Vec<&'a Task> {
    let needle = filter.search.to_lowercase();
    let mut view: Vec<&Task> = tasks
        .iter()
        .filter(|task| needle.is_empty() || task.text.to_lowercase().contains(&needle))
        .filter(|task| match filter.status {
            StatusFilter::All => true,
            StatusFilter::Done => task.done,
            StatusFilter::NotDone => !task.done,
        })
        .filter(|task| match filter.priority {
            PriorityFilter::All => true,
            PriorityFilter::Only(priority) => task.priority == priority,
        })
        .collect();
    view.sort_by_key(|task| task.done);
    view
}
