//! Authentication error types.

use thiserror::Error;

/// Errors from password hashing and token handling.
///
/// All variants are server-side failures. Credential mismatches are not
/// errors: password verification answers a `bool` and the HTTP layer maps
/// `false` to its own unauthorized response.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The configured signing key could not be loaded.
    #[error("invalid signing key: {0}")]
    SigningKey(String),

    /// A token could not be signed.
    #[error("token signing failed: {0}")]
    TokenSigning(String),

    /// A token failed signature, audience, or expiry checks.
    #[error("token validation failed: {0}")]
    TokenValidation(String),

    /// A password could not be hashed.
    #[error("password hashing failed: {0}")]
    PasswordHash(String),
}

/// Result alias for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;
