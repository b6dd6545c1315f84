//! Integration tests for the SQLite task repository against a real embedded
//! store, verifying CRUD operations, dynamic filtering, pagination counts,
//! and the no-op update contract.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Duration, Local, Utc};
use mockable::Clock;
use tasklite::task::{
    adapters::sqlite::{SqliteTaskRepository, TaskSqlitePool, connect},
    domain::{
        NewTask, PageRequest, TaskDescription, TaskFilter, TaskId, TaskPatch, TaskPriority,
        TaskStatus, TaskTitle,
    },
    ports::TaskRepository,
};
use tokio::runtime::Runtime;

/// Deterministic clock advancing one second per reading.
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

/// Creates a tokio runtime for async operations in tests.
fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

/// Opens a fresh in-memory store with migrations applied.
fn test_pool() -> TaskSqlitePool {
    connect(":memory:").expect("failed to open in-memory store")
}

fn test_repository() -> SqliteTaskRepository<SteppingClock> {
    SqliteTaskRepository::with_clock(test_pool(), Arc::new(SteppingClock::default()))
}

fn title(value: &str) -> TaskTitle {
    TaskTitle::new(value).expect("valid title")
}

fn draft(value: &str) -> NewTask {
    NewTask::new(title(value))
}

#[test]
fn create_assigns_identifier_and_roundtrips() {
    let rt = test_runtime();
    let repo = test_repository();

    let created = rt
        .block_on(repo.create(
            draft("Write the report")
                .with_description(TaskDescription::new("quarterly numbers").expect("valid")),
        ))
        .expect("create should succeed");

    assert!(created.id.value() >= 1);
    assert_eq!(created.status, TaskStatus::Pending);
    assert_eq!(created.priority, TaskPriority::Medium);
    assert_eq!(created.created_at, created.updated_at);

    let fetched = rt
        .block_on(repo.find_by_id(created.id))
        .expect("lookup should succeed");
    assert_eq!(fetched, Some(created));
}

#[test]
fn find_by_id_returns_none_for_missing_records() {
    let rt = test_runtime();
    let repo = test_repository();

    let missing = TaskId::new(99_999).expect("valid id");
    let fetched = rt
        .block_on(repo.find_by_id(missing))
        .expect("lookup should succeed");
    assert!(fetched.is_none());
}

#[test]
fn find_all_orders_newest_first_and_paginates() {
    let rt = test_runtime();
    let repo = test_repository();

    for index in 0..5 {
        rt.block_on(repo.create(draft(&format!("task {index}"))))
            .expect("create should succeed");
    }

    let page = rt
        .block_on(repo.find_all(&TaskFilter::new(), PageRequest::new(2, 1)))
        .expect("listing should succeed");

    assert_eq!(page.total, 5);
    let titles: Vec<&str> = page.tasks.iter().map(|task| task.title.as_str()).collect();
    // Newest first, skipping the newest one via the offset.
    assert_eq!(titles, vec!["task 3", "task 2"]);
}

#[test]
fn find_all_filters_conjunctively() {
    let rt = test_runtime();
    let repo = test_repository();

    rt.block_on(repo.create(draft("alpha").with_priority(TaskPriority::High)))
        .expect("create should succeed");
    rt.block_on(repo.create(
        draft("beta")
            .with_priority(TaskPriority::High)
            .with_status(TaskStatus::Completed),
    ))
    .expect("create should succeed");
    rt.block_on(repo.create(draft("gamma")))
        .expect("create should succeed");

    let page = rt
        .block_on(repo.find_all(
            &TaskFilter::new()
                .with_status(TaskStatus::Pending)
                .with_priority(TaskPriority::High),
            PageRequest::default(),
        ))
        .expect("listing should succeed");

    assert_eq!(page.total, 1);
    assert_eq!(
        page.tasks.first().map(|task| task.title.as_str()),
        Some("alpha")
    );
}

#[test]
fn search_matches_title_or_description_case_insensitively() {
    let rt = test_runtime();
    let repo = test_repository();

    rt.block_on(repo.create(draft("Fix the Parser")))
        .expect("create should succeed");
    rt.block_on(repo.create(
        draft("unrelated").with_description(TaskDescription::new("parser cleanup").expect("valid")),
    ))
    .expect("create should succeed");
    rt.block_on(repo.create(draft("something else")))
        .expect("create should succeed");

    let page = rt
        .block_on(repo.find_all(
            &TaskFilter::new().with_search("PARSER"),
            PageRequest::default(),
        ))
        .expect("listing should succeed");

    assert_eq!(page.total, 2);
}

#[test]
fn total_reflects_the_filtered_set_not_the_page() {
    let rt = test_runtime();
    let repo = test_repository();

    for index in 0..7 {
        rt.block_on(repo.create(draft(&format!("pending {index}"))))
            .expect("create should succeed");
    }
    rt.block_on(repo.create(draft("done").with_status(TaskStatus::Completed)))
        .expect("create should succeed");

    let page = rt
        .block_on(repo.find_all(
            &TaskFilter::new().with_status(TaskStatus::Pending),
            PageRequest::new(3, 0),
        ))
        .expect("listing should succeed");

    assert_eq!(page.tasks.len(), 3);
    assert_eq!(page.total, 7);
}

#[test]
fn update_touches_only_provided_fields() {
    let rt = test_runtime();
    let repo = test_repository();

    let created = rt
        .block_on(repo.create(
            draft("Original").with_description(TaskDescription::new("keep me").expect("valid")),
        ))
        .expect("create should succeed");

    let patch = TaskPatch::new()
        .with_title(title("Renamed"))
        .with_status(TaskStatus::InProgress);
    let updated = rt
        .block_on(repo.update(created.id, &patch))
        .expect("update should succeed")
        .expect("record should exist");

    assert_eq!(updated.title.as_str(), "Renamed");
    assert_eq!(updated.status, TaskStatus::InProgress);
    assert_eq!(
        updated.description.as_ref().map(|d| d.as_str()),
        Some("keep me")
    );
    assert_eq!(updated.priority, created.priority);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[test]
fn update_with_empty_patch_is_a_noop() {
    let rt = test_runtime();
    let repo = test_repository();

    let created = rt
        .block_on(repo.create(draft("Untouched")))
        .expect("create should succeed");

    let unchanged = rt
        .block_on(repo.update(created.id, &TaskPatch::new()))
        .expect("no-op update should succeed");

    // The record comes back as-is; even updated_at is left alone.
    assert_eq!(unchanged, Some(created));
}

#[test]
fn update_returns_none_for_missing_records() {
    let rt = test_runtime();
    let repo = test_repository();

    let missing = TaskId::new(12_345).expect("valid id");
    let patch = TaskPatch::new().with_title(title("ghost"));
    let updated = rt
        .block_on(repo.update(missing, &patch))
        .expect("update should succeed");
    assert!(updated.is_none());
}

#[test]
fn delete_reports_whether_a_row_was_removed() {
    let rt = test_runtime();
    let repo = test_repository();

    let created = rt
        .block_on(repo.create(draft("Ephemeral")))
        .expect("create should succeed");

    assert!(
        rt.block_on(repo.delete(created.id))
            .expect("delete should succeed")
    );
    assert!(
        !rt.block_on(repo.delete(created.id))
            .expect("second delete should succeed")
    );
}

#[test]
fn exists_probes_without_loading_the_record() {
    let rt = test_runtime();
    let repo = test_repository();

    let created = rt
        .block_on(repo.create(draft("Present")))
        .expect("create should succeed");
    let missing = TaskId::new(55_555).expect("valid id");

    assert!(
        rt.block_on(repo.exists(created.id))
            .expect("probe should succeed")
    );
    assert!(
        !rt.block_on(repo.exists(missing))
            .expect("probe should succeed")
    );
}

#[test]
fn connect_rejects_unopenable_database_paths() {
    let result = connect("/proc/tasklite/denied.sqlite3");
    assert!(result.is_err());
}
