//! User account model.

use uuid::Uuid;

/// A user account owned by a tenant.
///
/// Accounts are identified by a `(client_id, user_id)` pair: the same
/// person may hold separate accounts with different tenants. Email
/// addresses are unique across all tenants because they double as the
/// login name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique user id, generated server-side at registration.
    pub id: Uuid,
    /// Id of the owning tenant.
    pub client_id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address; globally unique login name.
    pub email: String,
    /// PHC-formatted password digest. Never serialized into responses.
    pub password_hash: String,
}

impl User {
    /// Creates a user with a freshly generated v4 id.
    #[must_use]
    pub fn new(
        client_id: Uuid,
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), client_id, name, email, password_hash)
    }

    /// Creates a user with an explicit id.
    ///
    /// Used when rehydrating records from storage and for fixed datasets.
    #[must_use]
    pub fn with_id(
        id: Uuid,
        client_id: Uuid,
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id,
            client_id,
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }
}
