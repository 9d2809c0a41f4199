//! Tenant directory lookup.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use uas_model::Client;
use uuid::Uuid;

use crate::error::DirectoryError;
use crate::token::TokenProvider;

/// Bounded timeout for directory lookups.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(2);

/// Answers whether a tenant id belongs to a registered client.
///
/// Implementations must be safe for concurrent shared use.
#[async_trait]
pub trait ClientDirectory: Send + Sync {
    /// Looks up a client by id.
    ///
    /// ## Errors
    ///
    /// Returns an error when the directory gives no usable answer;
    /// absence is `Ok(None)`, not an error.
    async fn get(&self, client_id: Uuid) -> Result<Option<Client>, DirectoryError>;
}

/// Directory backed by the external client service's REST API.
///
/// Looks up `GET {base}/api/v1/clients/{id}` with a bounded timeout. A
/// `200` answer carries the client record, `404` is a clean absence, and
/// anything else is an error: the caller must not treat a directory
/// outage as "tenant does not exist".
pub struct RestClientDirectory {
    base_url: String,
    http: reqwest::Client,
    token_provider: Option<Arc<dyn TokenProvider>>,
}

impl RestClientDirectory {
    /// Creates a directory against `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, DirectoryError> {
        let http = reqwest::Client::builder().timeout(LOOKUP_TIMEOUT).build()?;
        let base_url = base_url.into();
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http,
            token_provider: None,
        })
    }

    /// Attaches a provider for outbound bearer tokens.
    #[must_use]
    pub fn with_token_provider(mut self, provider: Arc<dyn TokenProvider>) -> Self {
        self.token_provider = Some(provider);
        self
    }
}

#[async_trait]
impl ClientDirectory for RestClientDirectory {
    async fn get(&self, client_id: Uuid) -> Result<Option<Client>, DirectoryError> {
        let url = format!("{}/api/v1/clients/{client_id}", self.base_url);
        let mut request = self.http.get(&url);
        if let Some(provider) = &self.token_provider {
            let token = provider.token().await?;
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        match response.status() {
            StatusCode::OK => Ok(Some(response.json().await?)),
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(DirectoryError::UnexpectedStatus {
                status: status.as_u16(),
            }),
        }
    }
}

/// Directory answering from a fixed in-memory set.
///
/// Serves handler tests and local development; production deployments
/// use [`RestClientDirectory`].
#[derive(Debug, Clone, Default)]
pub struct StaticClientDirectory {
    clients: HashMap<Uuid, Client>,
}

impl StaticClientDirectory {
    /// Creates a directory answering for the given clients.
    #[must_use]
    pub fn new(clients: impl IntoIterator<Item = Client>) -> Self {
        Self {
            clients: clients
                .into_iter()
                .map(|client| (client.id, client))
                .collect(),
        }
    }
}

#[async_trait]
impl ClientDirectory for StaticClientDirectory {
    async fn get(&self, client_id: Uuid) -> Result<Option<Client>, DirectoryError> {
        Ok(self.clients.get(&client_id).cloned())
    }
}
