//! Read-side value objects for the list operation.

use super::{Task, TaskPriority, TaskStatus};

/// Conjunctive filter narrowing the list operation.
///
/// All constraints are optional; an empty filter matches every task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Exact status match.
    pub status: Option<TaskStatus>,
    /// Exact priority match.
    pub priority: Option<TaskPriority>,
    /// Case-insensitive substring match against title or description.
    pub search: Option<String>,
}

impl TaskFilter {
    /// Creates a filter that matches every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to tasks with the given status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts to tasks with the given priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Restricts to tasks whose title or description contains the term.
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }
}

/// Limit/offset window applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of records returned.
    pub limit: u32,
    /// Number of filtered records skipped before the first returned one.
    pub offset: u32,
}

impl PageRequest {
    /// Page size applied when the caller does not specify one.
    pub const DEFAULT_LIMIT: u32 = 10;

    /// Largest accepted page size.
    pub const MAX_LIMIT: u32 = 100;

    /// Creates a page window.
    #[must_use]
    pub const fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT, 0)
    }
}

/// One page of filtered results plus the full filtered count.
///
/// `total` reflects every record matching the filter, independent of the
/// page window that produced `tasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPage {
    /// Records within the requested window, newest first.
    pub tasks: Vec<Task>,
    /// Count of all records matching the filter.
    pub total: u64,
}
