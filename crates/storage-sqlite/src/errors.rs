//! Storage error types.

use thiserror::Error;

/// Errors raised by the SQLite storage layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A query failed.
    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),

    /// A pooled connection could not be acquired.
    #[error("Connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),

    /// Schema migration failed at startup.
    #[error("Migration error: {0}")]
    Migration(String),

    /// A stored value could not be read back into its domain representation.
    #[error("Corrupted record: {0}")]
    Corrupted(String),
}

impl From<StorageError> for sokodash_core::Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Corrupted(message) => sokodash_core::Error::MalformedRecord(message),
            other => sokodash_core::Error::Storage(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrupted_records_map_to_malformed_record() {
        let err: sokodash_core::Error =
            StorageError::Corrupted("wallet is not a decimal".to_string()).into();
        assert!(matches!(err, sokodash_core::Error::MalformedRecord(_)));
    }

    #[test]
    fn migration_failures_map_to_storage() {
        let err: sokodash_core::Error = StorageError::Migration("missing table".to_string()).into();
        assert!(matches!(err, sokodash_core::Error::Storage(_)));
    }
}
