//! Outbound bearer tokens.

use async_trait::async_trait;

use crate::error::DirectoryError;

/// Supplies bearer tokens for authenticated outbound calls.
///
/// Deployments without service-to-service authentication simply configure
/// no provider and calls go out unauthenticated.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Returns a token to present as `Authorization: Bearer <token>`.
    ///
    /// ## Errors
    ///
    /// Returns an error when no token can be obtained.
    async fn token(&self) -> Result<String, DirectoryError>;
}

/// Provider handing out one fixed token from configuration.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    /// Creates a provider for the given token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn token(&self) -> Result<String, DirectoryError> {
        Ok(self.token.clone())
    }
}
