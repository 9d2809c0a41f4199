//! User store trait.

use async_trait::async_trait;
use uas_model::User;
use uuid::Uuid;

use crate::error::StorageResult;

/// Persistence operations over user accounts.
///
/// Implementations must be safe for concurrent shared use; the HTTP layer
/// holds one store behind an `Arc` for the lifetime of the process.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Looks up a user by its `(user_id, client_id)` pair.
    ///
    /// Both ids must match: a valid user id presented under the wrong
    /// tenant resolves to `None`.
    ///
    /// ## Errors
    ///
    /// Returns an error if the store cannot be queried.
    async fn get(&self, user_id: Uuid, client_id: Uuid) -> StorageResult<Option<User>>;

    /// Looks up a user by email across all tenants.
    ///
    /// Emails are unique by invariant. Should the store ever hold more
    /// than one record for the same email, implementations log the
    /// anomaly and answer `None` so that login fails closed instead of
    /// picking an arbitrary account.
    ///
    /// ## Errors
    ///
    /// Returns an error if the store cannot be queried.
    async fn find_by_email(&self, email: &str) -> StorageResult<Option<User>>;

    /// Persists a new user.
    ///
    /// Creates the owning tenant container first when it does not exist
    /// yet. The uniqueness check on the email and the insert are atomic:
    /// two concurrent creates with the same email yield exactly one
    /// winner.
    ///
    /// ## Errors
    ///
    /// Returns [`StorageError::DuplicateEmail`] when the email is already
    /// taken, or another error if the write fails.
    ///
    /// [`StorageError::DuplicateEmail`]: crate::StorageError::DuplicateEmail
    async fn create(&self, user: &User) -> StorageResult<()>;

    /// Deletes every user record across all tenants.
    ///
    /// ## Errors
    ///
    /// Returns an error if the wipe fails.
    async fn delete_all(&self) -> StorageResult<()>;
}
