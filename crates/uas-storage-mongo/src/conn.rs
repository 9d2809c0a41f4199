//! MongoDB connection bootstrap.

use std::time::Duration;

use bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use tracing::info;
use uas_storage::{StorageError, StorageResult};

/// Timeout applied to server selection and the initial connection, so a
/// misconfigured deployment fails fast at startup instead of hanging.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

/// MongoDB connection settings.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// Connection string (`mongodb://...`).
    pub uri: String,
    /// Database holding the `clients` and `users` collections.
    pub database: String,
}

/// Connects to MongoDB and verifies the connection with a ping.
///
/// # Errors
///
/// Returns [`StorageError::Connection`] when the URI is malformed or the
/// deployment cannot be reached.
pub async fn connect(config: &MongoConfig) -> StorageResult<Database> {
    let mut options = ClientOptions::parse(&config.uri)
        .await
        .map_err(StorageError::connection)?;
    options.server_selection_timeout = Some(CONNECT_TIMEOUT);
    options.connect_timeout = Some(CONNECT_TIMEOUT);

    let client = Client::with_options(options).map_err(StorageError::connection)?;
    let db = client.database(&config.database);
    db.run_command(doc! { "ping": 1 })
        .await
        .map_err(StorageError::connection)?;

    info!("connected to MongoDB database '{}'", config.database);
    Ok(db)
}
