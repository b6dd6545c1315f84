//! Store bootstrap: connection pool construction and schema migration.

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use thiserror::Error;
use tracing::info;

/// SQLite connection pool type used by task adapters.
pub type TaskSqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// Migrations compiled into the binary from the `migrations/` directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// SQLite has limited concurrent write support even with WAL mode; a single
/// connection avoids "database is locked" errors while the host runtime
/// interleaves statement executions.
const POOL_SIZE: u32 = 1;

/// Errors raised while opening the store.
#[derive(Debug, Error)]
pub enum StoreInitError {
    /// Connection pool could not be built or a connection checked out.
    #[error("failed to initialise connection pool: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),

    /// Session pragma could not be applied.
    #[error("failed to configure connection: {0}")]
    Configure(#[source] diesel::result::Error),

    /// Pending migrations could not be applied.
    #[error("failed to run migrations: {0}")]
    Migration(String),
}

/// Opens the store at `database_url`, applies session pragmas, and runs any
/// pending migrations.
///
/// The returned pool is the single process-wide store handle; it is threaded
/// into repository constructors rather than held in an ambient global.
///
/// # Errors
///
/// Returns [`StoreInitError`] when the pool cannot be built, a pragma fails,
/// or a migration does not apply.
pub fn connect(database_url: &str) -> Result<TaskSqlitePool, StoreInitError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder().max_size(POOL_SIZE).build(manager)?;

    let mut connection = pool.get()?;
    // WAL keeps readers unblocked during writes; the busy timeout covers the
    // rare contention that remains. Applied once since the pool holds a
    // single long-lived connection.
    diesel::sql_query("PRAGMA journal_mode = WAL")
        .execute(&mut connection)
        .map_err(StoreInitError::Configure)?;
    diesel::sql_query("PRAGMA busy_timeout = 5000")
        .execute(&mut connection)
        .map_err(StoreInitError::Configure)?;
    diesel::sql_query("PRAGMA foreign_keys = ON")
        .execute(&mut connection)
        .map_err(StoreInitError::Configure)?;

    connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| StoreInitError::Migration(err.to_string()))?;
    drop(connection);

    info!(database_url, pool_size = POOL_SIZE, "sqlite store ready");
    Ok(pool)
}
