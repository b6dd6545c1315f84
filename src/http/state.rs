//! Shared application state threaded into request handlers.

use crate::task::adapters::sqlite::SqliteTaskRepository;
use crate::task::services::TaskService;
use std::sync::Arc;
use std::time::Instant;

/// Per-process state handed to the router.
///
/// Constructed once at startup; the service inside holds the single
/// process-wide store handle.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Task orchestration service.
    pub service: Arc<TaskService<SqliteTaskRepository>>,
    /// Process start instant, the origin for the health uptime report.
    pub started_at: Instant,
    /// Runtime environment label reported by the health endpoint.
    pub environment: String,
}

impl AppState {
    /// Creates state around a service, marking now as the process start.
    #[must_use]
    pub fn new(service: TaskService<SqliteTaskRepository>, environment: impl Into<String>) -> Self {
        Self {
            service: Arc::new(service),
            started_at: Instant::now(),
            environment: environment.into(),
        }
    }
}
