//! Service orchestration tests over the in-memory repository.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskDomainError, TaskFilter, TaskId, TaskPatch, TaskPriority, TaskStatus},
    ports::TaskRepository,
    services::{
        CreateTaskRequest, ListTasksRequest, TaskService, TaskServiceError, UpdateTaskRequest,
    },
};
use chrono::{DateTime, Duration, Local, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};

/// Deterministic clock advancing one second per reading, so every record
/// gets a distinct, ordered timestamp.
#[derive(Debug, Default)]
struct SteppingClock {
    ticks: AtomicI64,
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        DateTime::UNIX_EPOCH + Duration::seconds(tick)
    }
}

type TestService = TaskService<InMemoryTaskRepository<SteppingClock>>;

#[fixture]
fn repository() -> Arc<InMemoryTaskRepository<SteppingClock>> {
    Arc::new(InMemoryTaskRepository::with_clock(Arc::new(
        SteppingClock::default(),
    )))
}

#[fixture]
fn service(repository: Arc<InMemoryTaskRepository<SteppingClock>>) -> TestService {
    TaskService::new(repository)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_applies_store_defaults(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new("Write the report"))
        .await
        .expect("creation should succeed");

    assert!(created.id.value() >= 1);
    assert_eq!(created.status, TaskStatus::Pending);
    assert_eq!(created.priority, TaskPriority::Medium);
    assert!(created.description.is_none());
    assert_eq!(created.created_at, created.updated_at);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_rejects_blank_title_and_persists_nothing(service: TestService) {
    let result = service.create_task(CreateTaskRequest::new("   ")).await;

    assert!(matches!(
        result,
        Err(TaskServiceError::Validation(TaskDomainError::EmptyTitle))
    ));
    let listing = service
        .get_all_tasks(ListTasksRequest::default())
        .await
        .expect("listing should succeed");
    assert_eq!(listing.pagination.total, 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_rejects_overlong_description(service: TestService) {
    let result = service
        .create_task(CreateTaskRequest::new("Valid").with_description("d".repeat(1001)))
        .await;

    assert!(matches!(
        result,
        Err(TaskServiceError::Validation(
            TaskDomainError::DescriptionTooLong { length: 1001 }
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_filters_by_status_and_counts_the_full_set(service: TestService) {
    for index in 0..3 {
        service
            .create_task(CreateTaskRequest::new(format!("pending {index}")))
            .await
            .expect("creation should succeed");
    }
    for index in 0..2 {
        service
            .create_task(
                CreateTaskRequest::new(format!("done {index}")).with_status(TaskStatus::Completed),
            )
            .await
            .expect("creation should succeed");
    }

    let listing = service
        .get_all_tasks(ListTasksRequest {
            filter: TaskFilter::new().with_status(TaskStatus::Pending),
            limit: Some(2),
            offset: None,
        })
        .await
        .expect("listing should succeed");

    assert_eq!(listing.tasks.len(), 2);
    assert!(
        listing
            .tasks
            .iter()
            .all(|task| task.status == TaskStatus::Pending)
    );
    // The total reflects the full filtered set, not the page.
    assert_eq!(listing.pagination.total, 3);
    assert!(listing.pagination.has_more);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_defaults_to_ten_newest_first(service: TestService) {
    for index in 0..12 {
        service
            .create_task(CreateTaskRequest::new(format!("task {index}")))
            .await
            .expect("creation should succeed");
    }

    let listing = service
        .get_all_tasks(ListTasksRequest::default())
        .await
        .expect("listing should succeed");

    assert_eq!(listing.tasks.len(), 10);
    assert_eq!(listing.pagination.limit, 10);
    assert_eq!(listing.pagination.offset, 0);
    assert_eq!(listing.pagination.total, 12);
    assert!(listing.pagination.has_more);
    assert_eq!(
        listing.tasks.first().map(|task| task.title.as_str()),
        Some("task 11")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_task_by_id_reports_missing_records(service: TestService) {
    let missing = TaskId::new(99_999).expect("valid id");
    let result = service.get_task_by_id(missing).await;
    assert!(matches!(result, Err(TaskServiceError::NotFound(id)) if id == missing));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_changes_only_provided_fields_and_advances_updated_at(service: TestService) {
    let created = service
        .create_task(
            CreateTaskRequest::new("Original")
                .with_description("keep me")
                .with_priority(TaskPriority::High),
        )
        .await
        .expect("creation should succeed");

    let updated = service
        .update_task(
            created.id,
            UpdateTaskRequest::new()
                .with_title("Renamed")
                .with_status(TaskStatus::Completed),
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.title.as_str(), "Renamed");
    assert_eq!(updated.status, TaskStatus::Completed);
    assert_eq!(
        updated.description.as_ref().map(|d| d.as_str()),
        Some("keep me")
    );
    assert_eq!(updated.priority, TaskPriority::High);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_with_empty_payload_is_a_client_error(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new("Untouched"))
        .await
        .expect("creation should succeed");

    let result = service.update_task(created.id, UpdateTaskRequest::new()).await;

    assert!(matches!(
        result,
        Err(TaskServiceError::Validation(TaskDomainError::EmptyUpdate))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repository_tolerates_empty_patch_as_noop(
    repository: Arc<InMemoryTaskRepository<SteppingClock>>,
) {
    let service = TaskService::new(Arc::clone(&repository));
    let created = service
        .create_task(CreateTaskRequest::new("Untouched"))
        .await
        .expect("creation should succeed");

    // Below the service, the same empty payload is a no-op, not an error.
    let unchanged = repository
        .update(created.id, &TaskPatch::new())
        .await
        .expect("no-op update should succeed");

    assert_eq!(unchanged, Some(created));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_reports_missing_records(service: TestService) {
    let missing = TaskId::new(424_242).expect("valid id");
    let result = service
        .update_task(missing, UpdateTaskRequest::new().with_title("ghost"))
        .await;
    assert!(matches!(result, Err(TaskServiceError::NotFound(id)) if id == missing));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_succeeds_once_then_reports_missing(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new("Ephemeral"))
        .await
        .expect("creation should succeed");

    service
        .delete_task(created.id)
        .await
        .expect("first delete should succeed");
    let second = service.delete_task(created.id).await;

    assert!(matches!(second, Err(TaskServiceError::NotFound(id)) if id == created.id));
}
