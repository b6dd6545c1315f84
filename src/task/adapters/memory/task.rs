//! In-memory repository for task service tests.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{NewTask, PageRequest, Task, TaskFilter, TaskId, TaskPage, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Mirrors the SQLite adapter's contract, including identifier assignment,
/// timestamp stamping, filter semantics, and newest-first ordering.
#[derive(Debug, Clone)]
pub struct InMemoryTaskRepository<C = DefaultClock>
where
    C: Clock + Send + Sync,
{
    state: Arc<RwLock<InMemoryTaskState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<i64, Task>,
    next_id: i64,
}

impl InMemoryTaskRepository {
    /// Creates an empty repository with the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty repository with an explicit clock.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryTaskState::default())),
            clock,
        }
    }
}

/// Matches a task against the conjunction of filter constraints.
fn matches(task: &Task, filter: &TaskFilter) -> bool {
    if filter.status.is_some_and(|status| task.status != status) {
        return false;
    }
    if filter
        .priority
        .is_some_and(|priority| task.priority != priority)
    {
        return false;
    }
    if let Some(search) = &filter.search {
        let needle = search.to_lowercase();
        let in_title = task.title.as_str().to_lowercase().contains(&needle);
        let in_description = task
            .description
            .as_ref()
            .is_some_and(|description| description.as_str().to_lowercase().contains(&needle));
        if !in_title && !in_description {
            return false;
        }
    }
    true
}

fn lock_poisoned() -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other("repository lock poisoned"))
}

#[async_trait]
impl<C> TaskRepository for InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    async fn create(&self, draft: NewTask) -> TaskRepositoryResult<Task> {
        let now = self.clock.utc();
        let mut state = self.state.write().map_err(|_| lock_poisoned())?;

        state.next_id += 1;
        let id = TaskId::new(state.next_id).map_err(TaskRepositoryError::persistence)?;
        let task = Task {
            id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
            created_at: now,
            updated_at: now,
        };
        state.tasks.insert(id.value(), task.clone());
        Ok(task)
    }

    async fn find_all(
        &self,
        filter: &TaskFilter,
        page: PageRequest,
    ) -> TaskRepositoryResult<TaskPage> {
        let state = self.state.read().map_err(|_| lock_poisoned())?;

        let mut selected: Vec<Task> = state
            .tasks
            .values()
            .filter(|task| matches(task, filter))
            .cloned()
            .collect();
        // Newest first, with the identifier as a deterministic tiebreaker.
        selected.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        let total =
            u64::try_from(selected.len()).map_err(TaskRepositoryError::persistence)?;
        let offset = usize::try_from(page.offset).map_err(TaskRepositoryError::persistence)?;
        let limit = usize::try_from(page.limit).map_err(TaskRepositoryError::persistence)?;
        let tasks = selected.into_iter().skip(offset).take(limit).collect();
        Ok(TaskPage { tasks, total })
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|_| lock_poisoned())?;
        Ok(state.tasks.get(&id.value()).cloned())
    }

    async fn update(&self, id: TaskId, patch: &TaskPatch) -> TaskRepositoryResult<Option<Task>> {
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }

        let now = self.clock.utc();
        let mut state = self.state.write().map_err(|_| lock_poisoned())?;

        let Some(task) = state.tasks.get_mut(&id.value()) else {
            return Ok(None);
        };
        if let Some(title) = &patch.title {
            task.title = title.clone();
        }
        if let Some(description) = &patch.description {
            task.description = Some(description.clone());
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        task.updated_at = now;
        Ok(Some(task.clone()))
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let mut state = self.state.write().map_err(|_| lock_poisoned())?;
        Ok(state.tasks.remove(&id.value()).is_some())
    }

    async fn exists(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let state = self.state.read().map_err(|_| lock_poisoned())?;
        Ok(state.tasks.contains_key(&id.value()))
    }
}
