//! SQLite storage for the Sokodash dashboard.
//!
//! Read-only repositories over the shared `packages` and `sellers` tables.
//! Every query acquires one pooled connection scoped to the call; nothing
//! here writes to the store.

pub mod db;
pub mod errors;
pub mod packages;
pub mod schema;
pub mod sellers;

#[cfg(test)]
pub(crate) mod test_support;

pub use db::{create_pool, get_connection, run_migrations, DbConnection, DbPool};
pub use errors::StorageError;
pub use packages::PackageRepository;
pub use sellers::SellerRepository;
