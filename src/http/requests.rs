//! Declarative per-route request validation.
//!
//! Applied before the controller executes, so invalid input never reaches
//! the service; the first failing rule short-circuits with its message. The
//! service layer re-validates independently, since it must also guard
//! callers that do not come through HTTP.

use super::error::ApiError;
use crate::task::domain::{
    PageRequest, TaskDescription, TaskFilter, TaskId, TaskPriority, TaskStatus, TaskTitle,
};
use crate::task::services::{CreateTaskRequest, ListTasksRequest, UpdateTaskRequest};
use serde::Deserialize;

/// Longest accepted search term, in characters.
const MAX_SEARCH_LENGTH: usize = 100;

/// Create body as received on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTaskBody {
    /// Required task title.
    pub title: Option<String>,
    /// Optional description.
    pub description: Option<String>,
    /// Optional initial status.
    pub status: Option<String>,
    /// Optional initial priority.
    pub priority: Option<String>,
}

impl CreateTaskBody {
    /// Checks every create rule and produces the service request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] with the first failing rule's
    /// message.
    pub fn validate(self) -> Result<CreateTaskRequest, ApiError> {
        let title = self.title.unwrap_or_default();
        check_title(&title)?;

        let mut request = CreateTaskRequest::new(title);
        if let Some(description) = self.description {
            check_description(&description)?;
            request = request.with_description(description);
        }
        if let Some(status) = self.status {
            request = request.with_status(parse_status(&status)?);
        }
        if let Some(priority) = self.priority {
            request = request.with_priority(parse_priority(&priority)?);
        }
        Ok(request)
    }
}

/// Update body as received on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTaskBody {
    /// Replacement title, if provided.
    pub title: Option<String>,
    /// Replacement description, if provided.
    pub description: Option<String>,
    /// Replacement status, if provided.
    pub status: Option<String>,
    /// Replacement priority, if provided.
    pub priority: Option<String>,
}

impl UpdateTaskBody {
    /// Checks every update rule and produces the service request.
    ///
    /// Payload emptiness is deliberately not checked here; the service owns
    /// that rule.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] with the first failing rule's
    /// message.
    pub fn validate(self) -> Result<UpdateTaskRequest, ApiError> {
        let mut request = UpdateTaskRequest::new();
        if let Some(title) = self.title {
            check_title(&title)?;
            request = request.with_title(title);
        }
        if let Some(description) = self.description {
            check_description(&description)?;
            request = request.with_description(description);
        }
        if let Some(status) = self.status {
            request = request.with_status(parse_status(&status)?);
        }
        if let Some(priority) = self.priority {
            request = request.with_priority(parse_priority(&priority)?);
        }
        Ok(request)
    }
}

/// List query parameters as received on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTasksQuery {
    /// Optional status filter.
    pub status: Option<String>,
    /// Optional priority filter.
    pub priority: Option<String>,
    /// Optional substring search term.
    pub search: Option<String>,
    /// Optional page size.
    pub limit: Option<String>,
    /// Optional page start.
    pub offset: Option<String>,
}

impl ListTasksQuery {
    /// Checks every list rule and produces the service request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] with the first failing rule's
    /// message.
    pub fn validate(self) -> Result<ListTasksRequest, ApiError> {
        let mut filter = TaskFilter::new();
        if let Some(status) = self.status {
            filter = filter.with_status(parse_status(&status)?);
        }
        if let Some(priority) = self.priority {
            filter = filter.with_priority(parse_priority(&priority)?);
        }
        if let Some(search) = self.search {
            if search.chars().count() > MAX_SEARCH_LENGTH {
                return Err(ApiError::Validation("Search term too long".to_owned()));
            }
            filter = filter.with_search(search);
        }

        let limit = self
            .limit
            .map(|raw| {
                raw.parse::<u32>()
                    .ok()
                    .filter(|value| (1..=PageRequest::MAX_LIMIT).contains(value))
                    .ok_or_else(|| {
                        ApiError::Validation("Limit must be between 1 and 100".to_owned())
                    })
            })
            .transpose()?;
        let offset = self
            .offset
            .map(|raw| {
                raw.parse::<u32>().map_err(|_| {
                    ApiError::Validation("Offset must be a non-negative integer".to_owned())
                })
            })
            .transpose()?;

        Ok(ListTasksRequest {
            filter,
            limit,
            offset,
        })
    }
}

/// Parses a path identifier segment into a task identifier.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] when the segment is not a positive
/// integer.
pub fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    raw.parse::<i64>()
        .ok()
        .and_then(|value| TaskId::new(value).ok())
        .ok_or_else(|| ApiError::Validation("Invalid task ID".to_owned()))
}

fn check_title(title: &str) -> Result<(), ApiError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation(
            "Title is required and cannot be empty".to_owned(),
        ));
    }
    if trimmed.chars().count() > TaskTitle::MAX_LENGTH {
        return Err(ApiError::Validation(
            "Title must not exceed 255 characters".to_owned(),
        ));
    }
    Ok(())
}

fn check_description(description: &str) -> Result<(), ApiError> {
    if description.chars().count() > TaskDescription::MAX_LENGTH {
        return Err(ApiError::Validation(
            "Description must not exceed 1000 characters".to_owned(),
        ));
    }
    Ok(())
}

fn parse_status(raw: &str) -> Result<TaskStatus, ApiError> {
    TaskStatus::try_from(raw).map_err(|_| ApiError::Validation("Invalid status value".to_owned()))
}

fn parse_priority(raw: &str) -> Result<TaskPriority, ApiError> {
    TaskPriority::try_from(raw)
        .map_err(|_| ApiError::Validation("Invalid priority value".to_owned()))
}
