//! Repository port for task persistence and lookup.

use crate::task::domain::{NewTask, PageRequest, Task, TaskFilter, TaskId, TaskPage, TaskPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Absence of a record is reported through `Option`/`bool` return values,
/// never as an error; only the service layer decides that a missing record
/// is a failure condition.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Inserts a new task and returns the freshly persisted record,
    /// re-read via the store-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Inconsistent`] when the post-insert
    /// read finds nothing, or [`TaskRepositoryError::Persistence`] on
    /// store-level failure.
    async fn create(&self, draft: NewTask) -> TaskRepositoryResult<Task>;

    /// Returns the filtered page ordered by creation time, newest first,
    /// together with the full filtered count.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] on store-level failure.
    async fn find_all(
        &self,
        filter: &TaskFilter,
        page: PageRequest,
    ) -> TaskRepositoryResult<TaskPage>;

    /// Finds a task by identifier, `None` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] on store-level failure.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Applies the provided fields to an existing task, always refreshing
    /// `updated_at`.
    ///
    /// An empty patch short-circuits to the current record unchanged; a
    /// missing target yields `None`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] on store-level failure.
    async fn update(&self, id: TaskId, patch: &TaskPatch) -> TaskRepositoryResult<Option<Task>>;

    /// Deletes a task by identifier, returning whether a row was removed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] on store-level failure.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool>;

    /// Cheap existence probe.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] on store-level failure.
    async fn exists(&self, id: TaskId) -> TaskRepositoryResult<bool>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The store reported success but left the data in a state the
    /// repository cannot explain, such as an insert whose row cannot be
    /// re-read.
    #[error("store consistency fault: {0}")]
    Inconsistent(String),

    /// Store-level failure: connectivity, constraint violation, or a
    /// malformed query. The store-specific error shape is deliberately not
    /// exposed upward.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
