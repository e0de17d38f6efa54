use anyhow::{Context, Result};
use r2d2_sqlite::SqliteConnectionManager;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

pub fn create_pool(database_path: &str) -> Result<DbPool> {
    let manager = build_manager(database_path);
    build_pool(manager)
}

/// Single-connection pool over a private in-memory database.
///
/// Every SQLite `:memory:` connection is its own database, so the pool is
/// capped at one connection to keep all callers on the same data.
pub fn create_memory_pool() -> Result<DbPool> {
    let manager = enable_foreign_keys(SqliteConnectionManager::memory());

    r2d2::Pool::builder()
        .max_size(1)
        .build(manager)
        .context("Failed to create in-memory database pool")
}

fn build_manager(path: &str) -> SqliteConnectionManager {
    enable_foreign_keys(SqliteConnectionManager::file(path))
}

// SQLite ignores FOREIGN KEY clauses unless enabled per connection
fn enable_foreign_keys(manager: SqliteConnectionManager) -> SqliteConnectionManager {
    manager.with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"))
}

fn build_pool(manager: SqliteConnectionManager) -> Result<DbPool> {
    r2d2::Pool::builder()
        .build(manager)
        .context("Failed to create database connection pool")
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    pool.get()
        .context("Failed to get database connection from pool")
}
