//! Storage error types.

use thiserror::Error;

/// Errors returned by user store implementations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A user with the same email already exists.
    ///
    /// This is the only recoverable storage error: the HTTP layer maps it
    /// to a conflict response instead of a server failure.
    #[error("a user with email '{email}' already exists")]
    DuplicateEmail {
        /// The contested email address.
        email: String,
    },

    /// The store could not be reached or the connection handshake failed.
    #[error("storage connection failed: {0}")]
    Connection(String),

    /// A read or write against the store failed.
    #[error("storage query failed: {0}")]
    Query(String),

    /// A multi-step write could not be committed.
    #[error("storage transaction failed: {0}")]
    Transaction(String),

    /// A stored document could not be converted back into the model.
    #[error("stored document is invalid: {0}")]
    InvalidDocument(String),
}

impl StorageError {
    /// Creates a [`StorageError::DuplicateEmail`] error.
    #[must_use]
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            email: email.into(),
        }
    }

    /// Creates a [`StorageError::Connection`] error.
    pub fn connection(source: impl std::fmt::Display) -> Self {
        Self::Connection(source.to_string())
    }

    /// Creates a [`StorageError::Query`] error.
    pub fn query(source: impl std::fmt::Display) -> Self {
        Self::Query(source.to_string())
    }

    /// Creates a [`StorageError::Transaction`] error.
    pub fn transaction(source: impl std::fmt::Display) -> Self {
        Self::Transaction(source.to_string())
    }

    /// Creates a [`StorageError::InvalidDocument`] error.
    pub fn invalid_document(source: impl std::fmt::Display) -> Self {
        Self::InvalidDocument(source.to_string())
    }

    /// Returns `true` if this is a duplicate-email conflict.
    #[must_use]
    pub const fn is_duplicate_email(&self) -> bool {
        matches!(self, Self::DuplicateEmail { .. })
    }
}

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
