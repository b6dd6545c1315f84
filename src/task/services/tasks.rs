//! Service layer for task CRUD orchestration and business validation.

use crate::task::{
    domain::{
        NewTask, PageRequest, Task, TaskDescription, TaskDomainError, TaskFilter, TaskId,
        TaskPatch, TaskPriority, TaskStatus, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for creating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the initial priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Request payload for partially updating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<String>,
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
}

impl UpdateTaskRequest {
    /// Creates a request that carries no fields yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
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

    /// Returns `true` when no field is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
    }
}

/// Request payload for the list operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTasksRequest {
    /// Optional narrowing constraints.
    pub filter: TaskFilter,
    /// Page size; defaults to [`PageRequest::DEFAULT_LIMIT`] when unset.
    pub limit: Option<u32>,
    /// Page start; defaults to zero when unset.
    pub offset: Option<u32>,
}

/// One page of tasks with pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListing {
    /// Records within the page window, newest first.
    pub tasks: Vec<Task>,
    /// Window description and full filtered count.
    pub pagination: PageInfo,
}

/// Pagination metadata accompanying a task listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Count of all records matching the filter.
    pub total: u64,
    /// Applied page size.
    pub limit: u32,
    /// Applied page start.
    pub offset: u32,
    /// Whether records remain beyond this page.
    pub has_more: bool,
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Business-rule validation failed.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// The referenced task does not exist.
    #[error("Task with ID {0} not found")]
    NotFound(TaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Validates business rules independently of the HTTP request validation so
/// that direct callers are guarded too, and converts repository absence into
/// the typed [`TaskServiceError::NotFound`] condition.
#[derive(Debug, Clone)]
pub struct TaskService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> TaskService<R>
where
    R: TaskRepository,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates and persists a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the title or description
    /// fail their bounds, or [`TaskServiceError::Repository`] when
    /// persistence fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let mut draft = NewTask::new(TaskTitle::new(request.title)?);
        if let Some(description) = request.description {
            draft = draft.with_description(TaskDescription::new(description)?);
        }
        if let Some(status) = request.status {
            draft = draft.with_status(status);
        }
        if let Some(priority) = request.priority {
            draft = draft.with_priority(priority);
        }

        info!(title = %draft.title, "creating task");
        let task = self.repository.create(draft).await?;
        info!(id = %task.id, "task created");
        Ok(task)
    }

    /// Returns the filtered task page with default pagination applied.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn get_all_tasks(&self, request: ListTasksRequest) -> TaskServiceResult<TaskListing> {
        let limit = request
            .limit
            .unwrap_or(PageRequest::DEFAULT_LIMIT)
            .clamp(1, PageRequest::MAX_LIMIT);
        let offset = request.offset.unwrap_or(0);

        debug!(?request.filter, limit, offset, "fetching tasks");
        let page = self
            .repository
            .find_all(&request.filter, PageRequest::new(limit, offset))
            .await?;

        let has_more = u64::from(offset) + u64::from(limit) < page.total;
        Ok(TaskListing {
            tasks: page.tasks,
            pagination: PageInfo {
                total: page.total,
                limit,
                offset,
                has_more,
            },
        })
    }

    /// Returns the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist,
    /// or [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn get_task_by_id(&self, id: TaskId) -> TaskServiceResult<Task> {
        debug!(%id, "fetching task");
        let task = self.repository.find_by_id(id).await?;
        task.ok_or_else(|| {
            warn!(%id, "task not found");
            TaskServiceError::NotFound(id)
        })
    }

    /// Validates and applies a partial update.
    ///
    /// An empty request is a client error here, stricter than the
    /// repository's no-op tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] for an empty payload or
    /// failing field bounds, [`TaskServiceError::NotFound`] when the task
    /// does not exist, or [`TaskServiceError::Repository`] when persistence
    /// fails.
    pub async fn update_task(
        &self,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<Task> {
        if request.is_empty() {
            return Err(TaskDomainError::EmptyUpdate.into());
        }

        let mut patch = TaskPatch::new();
        if let Some(title) = request.title {
            patch = patch.with_title(TaskTitle::new(title)?);
        }
        if let Some(description) = request.description {
            patch = patch.with_description(TaskDescription::new(description)?);
        }
        if let Some(status) = request.status {
            patch = patch.with_status(status);
        }
        if let Some(priority) = request.priority {
            patch = patch.with_priority(priority);
        }

        info!(%id, "updating task");
        let updated = self.repository.update(id, &patch).await?;
        let task = updated.ok_or_else(|| {
            warn!(%id, "task not found for update");
            TaskServiceError::NotFound(id)
        })?;
        info!(%id, "task updated");
        Ok(task)
    }

    /// Deletes the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist,
    /// or [`TaskServiceError::Repository`] when persistence fails.
    pub async fn delete_task(&self, id: TaskId) -> TaskServiceResult<()> {
        info!(%id, "deleting task");
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            warn!(%id, "task not found for deletion");
            return Err(TaskServiceError::NotFound(id));
        }
        info!(%id, "task deleted");
        Ok(())
    }
}
