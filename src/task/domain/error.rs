//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is missing or empty after trimming.
    #[error("Title is required and cannot be empty")]
    EmptyTitle,

    /// The title exceeds the persisted column bound.
    #[error("Title must not exceed 255 characters")]
    TitleTooLong {
        /// Character count of the rejected title.
        length: usize,
    },

    /// The description exceeds the persisted column bound.
    #[error("Description must not exceed 1000 characters")]
    DescriptionTooLong {
        /// Character count of the rejected description.
        length: usize,
    },

    /// The status value is not one of the enumerated states.
    #[error("Invalid status value: {0}")]
    InvalidStatus(String),

    /// The priority value is not one of the enumerated levels.
    #[error("Invalid priority value: {0}")]
    InvalidPriority(String),

    /// The task identifier is not a positive integer.
    #[error("Invalid task ID: {0}")]
    InvalidTaskId(i64),

    /// An update payload carried no fields at all.
    #[error("At least one field must be provided for update")]
    EmptyUpdate,
}
