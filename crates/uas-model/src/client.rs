//! Tenant (client) model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tenant as answered by the external client directory.
///
/// Tenant data is owned by the client service; this service only needs
/// enough of it to decide whether a registration targets a real tenant.
/// The wire shape matches the directory's `GET /api/v1/clients/{id}`
/// response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Unique tenant id.
    pub id: Uuid,
    /// Tenant display name.
    pub name: String,
}

impl Client {
    /// Creates a client record.
    #[must_use]
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
