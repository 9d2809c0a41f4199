//! Request and response shapes.
//!
//! Request bodies are validated from raw JSON (see [`crate::validate`]),
//! so the request structs here are validation *outputs*, already typed
//! and bounds-checked.

use serde::{Deserialize, Serialize};
use uas_model::User;
use uuid::Uuid;

/// Validated body of `POST /api/v1/auth/user`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    /// The account email; the wire field is historically `username`.
    pub username: String,
    /// Plaintext password to verify.
    pub password: String,
}

/// Validated body of `POST /api/v1/users`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterRequest {
    /// Owning tenant.
    pub client_id: Uuid,
    /// Display name, 1–60 characters.
    pub name: String,
    /// Account email, globally unique.
    pub email: String,
    /// Plaintext password, at least 8 characters.
    pub password: String,
}

/// Validated body of `POST /api/v1/users/detail`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    /// Email to look up.
    pub email: String,
}

/// Query parameters of `POST /api/v1/reset/user`.
#[derive(Debug, Default, Deserialize)]
pub struct ResetParams {
    /// Demo-seeding flag; only the literal string `true` seeds.
    pub demo: Option<String>,
}

/// Public projection of a user record.
///
/// This is the only user shape that crosses the wire; the password hash
/// has no field here and can never serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User id.
    pub id: Uuid,
    /// Owning tenant.
    pub client_id: Uuid,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            client_id: user.client_id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Body of a successful login.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed session token.
    pub token: String,
}

/// Body of the admin and health endpoints.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatusResponse {
    /// Either `Ok` or `Error`.
    pub status: &'static str,
}

impl StatusResponse {
    /// The success body, `{"status":"Ok"}`.
    pub const OK: Self = Self { status: "Ok" };
    /// The failure body, `{"status":"Error"}`.
    pub const ERROR: Self = Self { status: "Error" };
}
