//! In-memory user store.

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::error;
use uas_model::User;
use uuid::Uuid;

use crate::error::{StorageError, StorageResult};
use crate::store::UserStore;

/// Simple in-memory store for tests and local development.
///
/// Records are kept in insertion order, so scans observe the same order
/// in which users were created. Tenant containers have no separate
/// representation here: the hierarchy is implied by the `client_id`
/// field on the records themselves.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl MemoryUserStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record without the email uniqueness check.
    ///
    /// Exists so tests can manufacture the duplicate-email anomaly that
    /// [`UserStore::find_by_email`] must tolerate.
    pub async fn insert_unchecked(&self, user: User) {
        self.users.lock().await.push(user);
    }

    /// Returns a snapshot of every record in insertion order.
    pub async fn all(&self) -> Vec<User> {
        self.users.lock().await.clone()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn get(&self, user_id: Uuid, client_id: Uuid) -> StorageResult<Option<User>> {
        let users = self.users.lock().await;
        Ok(users
            .iter()
            .find(|user| user.id == user_id && user.client_id == client_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> StorageResult<Option<User>> {
        let users = self.users.lock().await;
        let mut matches = users.iter().filter(|user| user.email == email);

        let first = matches.next();
        if first.is_some() && matches.next().is_some() {
            error!("Multiple users found with email {email}");
            return Ok(None);
        }
        Ok(first.cloned())
    }

    async fn create(&self, user: &User) -> StorageResult<()> {
        let mut users = self.users.lock().await;
        if users.iter().any(|existing| existing.email == user.email) {
            return Err(StorageError::duplicate_email(&user.email));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn delete_all(&self) -> StorageResult<()> {
        self.users.lock().await.clear();
        Ok(())
    }
}
