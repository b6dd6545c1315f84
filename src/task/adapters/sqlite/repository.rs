//! SQLite repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow, row_to_task},
    schema::tasks,
    store::TaskSqlitePool,
};
use crate::task::{
    domain::{NewTask, PageRequest, Task, TaskFilter, TaskId, TaskPage, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::{Sqlite, SqliteConnection};
use mockable::{Clock, DefaultClock};
use std::sync::Arc;

/// SQLite-backed task repository.
///
/// All statements run on the blocking thread pool; the shared connection
/// pool serialises access to the store.
#[derive(Clone)]
pub struct SqliteTaskRepository<C = DefaultClock>
where
    C: Clock + Send + Sync,
{
    pool: TaskSqlitePool,
    clock: Arc<C>,
}

impl<C> std::fmt::Debug for SqliteTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteTaskRepository")
            .field("pool", &self.pool)
            .finish_non_exhaustive()
    }
}

impl SqliteTaskRepository {
    /// Creates a repository over the given pool with the system clock.
    #[must_use]
    pub fn new(pool: TaskSqlitePool) -> Self {
        Self::with_clock(pool, Arc::new(DefaultClock))
    }
}

impl<C> SqliteTaskRepository<C>
where
    C: Clock + Send + Sync + 'static,
{
    /// Creates a repository with an explicit clock for timestamp assignment.
    #[must_use]
    pub const fn with_clock(pool: TaskSqlitePool, clock: Arc<C>) -> Self {
        Self { pool, clock }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl<C> TaskRepository for SqliteTaskRepository<C>
where
    C: Clock + Send + Sync + 'static,
{
    async fn create(&self, draft: NewTask) -> TaskRepositoryResult<Task> {
        let new_row = NewTaskRow::from_draft(draft, self.clock.utc().naive_utc());

        self.run_blocking(move |connection| {
            let assigned_id: i64 = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(tasks::id)
                .get_result(connection)
                .map_err(TaskRepositoryError::persistence)?;

            let row = find_row(connection, assigned_id)?.ok_or_else(|| {
                TaskRepositoryError::Inconsistent(format!(
                    "task {assigned_id} missing on post-insert read"
                ))
            })?;
            row_to_task(row)
        })
        .await
    }

    async fn find_all(
        &self,
        filter: &TaskFilter,
        page: PageRequest,
    ) -> TaskRepositoryResult<TaskPage> {
        let list_filter = filter.clone();
        let count_filter = filter.clone();

        self.run_blocking(move |connection| {
            let rows = filtered(&list_filter)
                .order(tasks::created_at.desc())
                .then_order_by(tasks::id.desc())
                .limit(i64::from(page.limit))
                .offset(i64::from(page.offset))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;

            // The count runs against an independently built predicate so the
            // total always reflects the full filtered set, never the page.
            let total: i64 = filtered(&count_filter)
                .count()
                .get_result(connection)
                .map_err(TaskRepositoryError::persistence)?;

            Ok(TaskPage {
                tasks: rows
                    .into_iter()
                    .map(row_to_task)
                    .collect::<TaskRepositoryResult<Vec<_>>>()?,
                total: u64::try_from(total).map_err(TaskRepositoryError::persistence)?,
            })
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            find_row(connection, id.value())?.map(row_to_task).transpose()
        })
        .await
    }

    async fn update(&self, id: TaskId, patch: &TaskPatch) -> TaskRepositoryResult<Option<Task>> {
        // The no-op tolerance is a repository-layer decision; the service
        // rejects empty updates from clients before reaching this point.
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }

        let changeset = TaskChangeset::from_patch(patch, self.clock.utc().naive_utc());

        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.find(id.value()))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;

            if affected == 0 {
                return Ok(None);
            }
            find_row(connection, id.value())?.map(row_to_task).transpose()
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(tasks::table.find(id.value()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(affected > 0)
        })
        .await
    }

    async fn exists(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            diesel::select(diesel::dsl::exists(tasks::table.find(id.value())))
                .get_result(connection)
                .map_err(TaskRepositoryError::persistence)
        })
        .await
    }
}

/// Builds the filter predicate as a boxed query.
///
/// List and count calls each build their own predicate from the same filter,
/// so filter and pagination parameters are bound independently and can never
/// interfere positionally.
fn filtered(filter: &TaskFilter) -> tasks::BoxedQuery<'static, Sqlite> {
    let mut query = tasks::table.into_boxed();

    if let Some(status) = filter.status {
        query = query.filter(tasks::status.eq(status.as_str()));
    }
    if let Some(priority) = filter.priority {
        query = query.filter(tasks::priority.eq(priority.as_str()));
    }
    if let Some(search) = &filter.search {
        // SQLite LIKE is case-insensitive for ASCII by default.
        let pattern = format!("%{search}%");
        query = query.filter(
            tasks::title
                .like(pattern.clone())
                .nullable()
                .or(tasks::description.like(pattern)),
        );
    }

    query
}

fn find_row(connection: &mut SqliteConnection, id: i64) -> TaskRepositoryResult<Option<TaskRow>> {
    tasks::table
        .find(id)
        .select(TaskRow::as_select())
        .first::<TaskRow>(connection)
        .optional()
        .map_err(TaskRepositoryError::persistence)
}
