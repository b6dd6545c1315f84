//! Application services for task orchestration.

mod tasks;

pub use tasks::{
    CreateTaskRequest, ListTasksRequest, PageInfo, TaskListing, TaskService, TaskServiceError,
    TaskServiceResult, UpdateTaskRequest,
};
