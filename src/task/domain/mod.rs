//! Domain model for task management.
//!
//! The task domain models a single entity with validated scalar fields,
//! enumerated workflow state and priority, and write-side value objects for
//! creation and partial update, keeping all infrastructure concerns outside
//! of the domain boundary.

mod draft;
mod error;
mod fields;
mod ids;
mod query;
mod task;

pub use draft::{NewTask, TaskPatch};
pub use error::TaskDomainError;
pub use fields::{TaskDescription, TaskTitle};
pub use ids::TaskId;
pub use query::{PageRequest, TaskFilter, TaskPage};
pub use task::{Task, TaskPriority, TaskStatus};
