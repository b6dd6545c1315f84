//! Diesel row models for task persistence.

use super::schema::tasks;
use crate::task::{
    domain::{
        NewTask, Task, TaskDescription, TaskId, TaskPatch, TaskPriority, TaskStatus, TaskTitle,
    },
    ports::{TaskRepositoryError, TaskRepositoryResult},
};
use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaskRow {
    /// Store-assigned surrogate key.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Workflow state in canonical string form.
    pub status: String,
    /// Scheduling priority in canonical string form.
    pub priority: String,
    /// Creation timestamp (UTC, stored naive).
    pub created_at: NaiveDateTime,
    /// Last update timestamp (UTC, stored naive).
    pub updated_at: NaiveDateTime,
}

/// Insert model for task records; the store assigns the identifier.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Workflow state in canonical string form.
    pub status: String,
    /// Scheduling priority in canonical string form.
    pub priority: String,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
    /// Last update timestamp.
    pub updated_at: NaiveDateTime,
}

impl NewTaskRow {
    /// Builds an insert row from a draft, stamping both timestamps with the
    /// same instant.
    #[must_use]
    pub fn from_draft(draft: NewTask, now: NaiveDateTime) -> Self {
        Self {
            title: draft.title.into_string(),
            description: draft.description.map(TaskDescription::into_string),
            status: draft.status.as_str().to_owned(),
            priority: draft.priority.as_str().to_owned(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Update model touching only the fields present in a patch.
///
/// `None` fields are skipped by Diesel's changeset generation, so unset
/// fields are never mentioned in the generated `UPDATE`. `updated_at` is
/// unconditionally refreshed.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// Replacement title, if provided.
    pub title: Option<String>,
    /// Replacement description, if provided.
    pub description: Option<String>,
    /// Replacement status, if provided.
    pub status: Option<String>,
    /// Replacement priority, if provided.
    pub priority: Option<String>,
    /// Refreshed update timestamp.
    pub updated_at: NaiveDateTime,
}

impl TaskChangeset {
    /// Builds a changeset from a patch, stamping `updated_at`.
    #[must_use]
    pub fn from_patch(patch: &TaskPatch, now: NaiveDateTime) -> Self {
        Self {
            title: patch.title.clone().map(TaskTitle::into_string),
            description: patch.description.clone().map(TaskDescription::into_string),
            status: patch.status.map(|status| status.as_str().to_owned()),
            priority: patch.priority.map(|priority| priority.as_str().to_owned()),
            updated_at: now,
        }
    }
}

/// Reconstructs a domain record from a persisted row.
///
/// Rows are written through the same domain validation, so a failure here
/// means the store holds data the application could not have produced; it is
/// reported as a persistence error rather than a validation error.
pub fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        status,
        priority,
        created_at,
        updated_at,
    } = row;

    Ok(Task {
        id: TaskId::new(id).map_err(TaskRepositoryError::persistence)?,
        title: TaskTitle::new(title).map_err(TaskRepositoryError::persistence)?,
        description: description
            .map(TaskDescription::new)
            .transpose()
            .map_err(TaskRepositoryError::persistence)?,
        status: TaskStatus::try_from(status.as_str()).map_err(TaskRepositoryError::persistence)?,
        priority: TaskPriority::try_from(priority.as_str())
            .map_err(TaskRepositoryError::persistence)?,
        created_at: created_at.and_utc(),
        updated_at: updated_at.and_utc(),
    })
}
