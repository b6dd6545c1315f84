//! SQLite adapters for task persistence.

mod models;
mod repository;
mod schema;
mod store;

pub use repository::SqliteTaskRepository;
pub use store::{MIGRATIONS, StoreInitError, TaskSqlitePool, connect};
