//! BSON document shapes for the store collections.

use serde::{Deserialize, Serialize};
use uas_model::User;
use uas_storage::{StorageError, StorageResult};
use uuid::Uuid;

/// Collection holding user documents.
pub const USERS_COLLECTION: &str = "users";

/// Collection holding tenant container documents.
pub const CLIENTS_COLLECTION: &str = "clients";

/// A user record as stored in the `users` collection.
///
/// UUIDs are stored as hyphenated lowercase strings. The password digest
/// lives under `password` and never leaves the storage layer through any
/// response shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDocument {
    /// Document id: the user id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Id of the owning tenant.
    pub client_id: String,
    /// Display name.
    pub name: String,
    /// Email address; globally unique.
    pub email: String,
    /// PHC-formatted password digest.
    pub password: String,
}

impl UserDocument {
    /// Builds a document from the domain model.
    #[must_use]
    pub fn from_model(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            client_id: user.client_id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password_hash.clone(),
        }
    }

    /// Converts the document back into the domain model.
    ///
    /// ## Errors
    ///
    /// Returns [`StorageError::InvalidDocument`] when a stored id is not
    /// a valid UUID.
    pub fn into_model(self) -> StorageResult<User> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|err| StorageError::invalid_document(format!("user id '{}': {err}", self.id)))?;
        let client_id = Uuid::parse_str(&self.client_id).map_err(|err| {
            StorageError::invalid_document(format!("client id '{}': {err}", self.client_id))
        })?;
        Ok(User {
            id,
            client_id,
            name: self.name,
            email: self.email,
            password_hash: self.password,
        })
    }
}

/// A tenant container document in the `clients` collection.
///
/// Tenant data itself is owned by the client service; the container only
/// anchors the tenant/user hierarchy and carries no fields beyond its id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientDocument {
    /// Tenant id.
    #[serde(rename = "_id")]
    pub id: String,
}
