//! Error types shared across the dashboard crates.

use thiserror::Error;

/// Result type alias for dashboard operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can surface during a refresh tick.
#[derive(Debug, Error)]
pub enum Error {
    /// The store could not be reached or a query failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A fetched record was missing or carried an unreadable field.
    /// Aborts the tick that observed it; the previous view stays in place.
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// Invalid startup configuration (bad env value, unparseable number).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Anything that should not happen during normal operation.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Create a storage error from a displayable cause.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Create a malformed-record error.
    pub fn malformed_record(message: impl Into<String>) -> Self {
        Self::MalformedRecord(message.into())
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create an unexpected error.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    /// True when the error aborts only the current tick and the next
    /// scheduled tick should retry as usual.
    pub fn is_tick_scoped(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::MalformedRecord(_))
    }
}
