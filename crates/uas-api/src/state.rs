//! Shared handler state.

use std::sync::Arc;

use uas_auth::{PasswordHasherService, TokenIssuer};
use uas_directory::ClientDirectory;
use uas_storage::UserStore;

use crate::backup::ExportClient;

/// State shared by every handler.
///
/// Generic over the store and directory seams so handler tests run on
/// the in-memory implementations. Everything is behind an `Arc`; the
/// handlers themselves hold no locks.
pub struct AppState<S, D>
where
    S: UserStore,
    D: ClientDirectory,
{
    /// User repository.
    pub store: Arc<S>,
    /// Tenant existence oracle.
    pub directory: Arc<D>,
    /// Password hasher.
    pub hasher: Arc<PasswordHasherService>,
    /// Session token issuer.
    pub issuer: Arc<TokenIssuer>,
    /// Export trigger for backups.
    pub export: Arc<ExportClient>,
}

// Manual Clone: `Arc` clones regardless of the inner types.
impl<S, D> Clone for AppState<S, D>
where
    S: UserStore,
    D: ClientDirectory,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            directory: Arc::clone(&self.directory),
            hasher: Arc::clone(&self.hasher),
            issuer: Arc::clone(&self.issuer),
            export: Arc::clone(&self.export),
        }
    }
}

impl<S, D> AppState<S, D>
where
    S: UserStore,
    D: ClientDirectory,
{
    /// Creates the shared state.
    pub fn new(
        store: Arc<S>,
        directory: Arc<D>,
        hasher: Arc<PasswordHasherService>,
        issuer: Arc<TokenIssuer>,
        export: Arc<ExportClient>,
    ) -> Self {
        Self {
            store,
            directory,
            hasher,
            issuer,
            export,
        }
    }
}
