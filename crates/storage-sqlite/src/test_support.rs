//! Shared fixtures for in-crate tests.

use std::sync::Arc;

use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;

use crate::db::DbPool;

/// In-memory pool capped at one connection so every checkout sees the same
/// `:memory:` database.
pub fn test_pool() -> Arc<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
    let pool = Pool::builder()
        .max_size(1)
        .build(manager)
        .expect("failed to build in-memory pool");
    Arc::new(pool)
}
