//! Write-side value objects describing task creation and mutation.

use super::{TaskDescription, TaskPriority, TaskStatus, TaskTitle};

/// Field set for a task that has not been persisted yet.
///
/// Unset fields take the store defaults: no description, `pending` status,
/// `medium` priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Validated title, the only required field.
    pub title: TaskTitle,
    /// Optional description.
    pub description: Option<TaskDescription>,
    /// Initial workflow state.
    pub status: TaskStatus,
    /// Initial priority.
    pub priority: TaskPriority,
}

impl NewTask {
    /// Creates a draft with the given title and default remaining fields.
    #[must_use]
    pub fn new(title: TaskTitle) -> Self {
        Self {
            title,
            description: None,
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: TaskDescription) -> Self {
        self.description = Some(description);
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the initial priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }
}

/// Partial field set applied to an existing task.
///
/// `None` fields are left untouched by the repository. An entirely empty
/// patch is tolerated at the repository layer (no-op) but rejected by the
/// service layer, which treats it as a client error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// Replacement title, if provided.
    pub title: Option<TaskTitle>,
    /// Replacement description, if provided.
    pub description: Option<TaskDescription>,
    /// Replacement status, if provided.
    pub status: Option<TaskStatus>,
    /// Replacement priority, if provided.
    pub priority: Option<TaskPriority>,
}

impl TaskPatch {
    /// Creates a patch that touches nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: TaskDescription) -> Self {
        self.description = Some(description);
        self
    }

    /// Sets the replacement status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the replacement priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns `true` when no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
    }
}
