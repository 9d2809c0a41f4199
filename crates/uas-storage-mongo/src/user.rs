//! MongoDB user store.

use async_trait::async_trait;
use bson::doc;
use futures::{FutureExt, TryStreamExt};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{IndexOptions, ReadConcern, WriteConcern};
use mongodb::{Collection, Database, IndexModel};
use tracing::error;
use uas_model::User;
use uas_storage::{StorageError, StorageResult, UserStore};
use uuid::Uuid;

use crate::document::{ClientDocument, UserDocument, CLIENTS_COLLECTION, USERS_COLLECTION};

/// MongoDB server error code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// User store backed by a MongoDB database.
pub struct MongoUserStore {
    db: Database,
    users: Collection<UserDocument>,
    clients: Collection<ClientDocument>,
}

impl MongoUserStore {
    /// Creates the store over an established database handle.
    ///
    /// No writes happen here; the server calls
    /// [`MongoUserStore::apply_indexes`] once at startup, while read-only
    /// tooling skips it.
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self {
            users: db.collection(USERS_COLLECTION),
            clients: db.collection(CLIENTS_COLLECTION),
            db,
        }
    }

    /// Builds the unique email index backing the global uniqueness
    /// invariant.
    ///
    /// # Errors
    ///
    /// Returns an error if the index build fails.
    pub async fn apply_indexes(&self) -> StorageResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("users_email_unique".to_owned())
                    .build(),
            )
            .build();
        self.users
            .create_index(index)
            .await
            .map_err(StorageError::query)?;
        Ok(())
    }

    /// Lists every tenant container id. Diagnostic surface for the
    /// operator CLI; the service itself never enumerates tenants.
    ///
    /// # Errors
    ///
    /// Returns an error when the scan fails or a container id is corrupt.
    pub async fn client_ids(&self) -> StorageResult<Vec<Uuid>> {
        let mut cursor = self
            .clients
            .find(doc! {})
            .await
            .map_err(StorageError::query)?;

        let mut ids = Vec::new();
        while let Some(container) = cursor.try_next().await.map_err(StorageError::query)? {
            ids.push(Uuid::parse_str(&container.id).map_err(StorageError::invalid_document)?);
        }
        Ok(ids)
    }

    /// Lists a tenant's users. Diagnostic surface for the operator CLI.
    ///
    /// # Errors
    ///
    /// Returns an error when the scan fails or a record is corrupt.
    pub async fn users_of(&self, client_id: Uuid) -> StorageResult<Vec<User>> {
        let mut cursor = self
            .users
            .find(doc! { "client_id": client_id.to_string() })
            .await
            .map_err(StorageError::query)?;

        let mut users = Vec::new();
        while let Some(document) = cursor.try_next().await.map_err(StorageError::query)? {
            users.push(document.into_model()?);
        }
        Ok(users)
    }

    /// Idempotently creates the container document for a tenant.
    async fn ensure_client_container(&self, client_id: Uuid) -> StorageResult<()> {
        let container = ClientDocument {
            id: client_id.to_string(),
        };
        match self.clients.insert_one(&container).await {
            Ok(_) => Ok(()),
            Err(err) if is_duplicate_key(&err) => Ok(()),
            Err(err) => Err(StorageError::query(err)),
        }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn get(&self, user_id: Uuid, client_id: Uuid) -> StorageResult<Option<User>> {
        let filter = doc! {
            "_id": user_id.to_string(),
            "client_id": client_id.to_string(),
        };
        let document = self
            .users
            .find_one(filter)
            .await
            .map_err(StorageError::query)?;
        document.map(UserDocument::into_model).transpose()
    }

    async fn find_by_email(&self, email: &str) -> StorageResult<Option<User>> {
        // Two documents are enough to tell a unique match from an
        // anomaly; no need to scan further.
        let mut cursor = self
            .users
            .find(doc! { "email": email })
            .limit(2)
            .await
            .map_err(StorageError::query)?;

        let Some(document) = cursor.try_next().await.map_err(StorageError::query)? else {
            return Ok(None);
        };
        if cursor
            .try_next()
            .await
            .map_err(StorageError::query)?
            .is_some()
        {
            error!("Multiple users found with email {email}");
            return Ok(None);
        }
        Ok(Some(document.into_model()?))
    }

    async fn create(&self, user: &User) -> StorageResult<()> {
        self.ensure_client_container(user.client_id).await?;

        let mut session = self
            .db
            .client()
            .start_session()
            .await
            .map_err(StorageError::transaction)?;

        // The existence check and the insert commit atomically; the
        // unique index is the backstop should two transactions race past
        // the check on different shards of time.
        let created = session
            .start_transaction()
            .read_concern(ReadConcern::snapshot())
            .write_concern(WriteConcern::majority())
            .and_run(
                (self.users.clone(), UserDocument::from_model(user)),
                |session, (users, document)| {
                    async move {
                        let existing = users
                            .find_one(doc! { "email": document.email.as_str() })
                            .session(&mut *session)
                            .await?;
                        if existing.is_some() {
                            return Ok(false);
                        }
                        users.insert_one(&*document).session(session).await?;
                        Ok(true)
                    }
                    .boxed()
                },
            )
            .await
            .map_err(|err| {
                if is_duplicate_key(&err) {
                    StorageError::duplicate_email(&user.email)
                } else {
                    StorageError::transaction(err)
                }
            })?;

        if created {
            Ok(())
        } else {
            Err(StorageError::duplicate_email(&user.email))
        }
    }

    async fn delete_all(&self) -> StorageResult<()> {
        self.users
            .delete_many(doc! {})
            .await
            .map_err(StorageError::query)?;
        Ok(())
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match &*err.kind {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}
