//! API error types.
//!
//! Maps failures from the storage, directory, and auth layers to the
//! wire contract: every error renders as `{"message": ..., "code": ...}`
//! with `code` mirroring the HTTP status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;
use uas_auth::{AuthError, GatewayError};
use uas_directory::DirectoryError;
use uas_storage::StorageError;

/// Errors surfaced by the HTTP handlers.
///
/// The display text of each variant is the exact `message` returned to
/// callers; internal detail never leaks past [`ApiError::Internal`],
/// which logs it and renders a generic message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request failed schema or identifier validation.
    #[error("{0}")]
    BadRequest(String),

    /// Caller identity is absent or credentials did not match.
    #[error("{0}")]
    Unauthorized(String),

    /// The requested record does not exist.
    #[error("{0}")]
    NotFound(&'static str),

    /// The write collides with an existing record.
    #[error("{0}")]
    Conflict(&'static str),

    /// A dependency failed; the detail goes to the log, not the caller.
    #[error("Internal server error.")]
    Internal(String),
}

impl ApiError {
    /// Error for a request body that is not valid JSON.
    #[must_use]
    pub fn malformed_body() -> Self {
        Self::BadRequest("The request body could not be parsed as valid JSON.".to_owned())
    }

    /// The uniform login failure. Unknown email and wrong password read
    /// identically so the response does not confirm which emails exist.
    #[must_use]
    pub fn invalid_credentials() -> Self {
        Self::Unauthorized("Invalid username or password.".to_owned())
    }

    /// Error for a lookup that found no user.
    #[must_use]
    pub const fn user_not_found() -> Self {
        Self::NotFound("User not found")
    }

    /// Error for a registration against an already-taken email.
    #[must_use]
    pub const fn duplicate_email() -> Self {
        Self::Conflict("A user with the email already exists.")
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        if err.is_duplicate_email() {
            Self::duplicate_email()
        } else {
            Self::Internal(err.to_string())
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        Self::Unauthorized(err.to_string())
    }
}

/// Wire shape of an error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub message: String,
    /// Numeric mirror of the HTTP status.
    pub code: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(detail) = &self {
            error!("request failed: {detail}");
        }
        let status = self.status_code();
        let body = ErrorBody {
            message: self.to_string(),
            code: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}

/// Result type for handler operations.
pub type ApiResult<T> = Result<T, ApiError>;
