//! Outbound export trigger backing `POST /api/v1/backup/user`.
//!
//! The service does not copy data itself; it asks a managed export
//! endpoint to snapshot the user database into an output location. One
//! request, one answer: exactly 200 counts as accepted.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use thiserror::Error;
use uas_directory::TokenProvider;

/// Budget for the outbound export request.
const EXPORT_TIMEOUT: Duration = Duration::from_secs(10);

/// Export endpoint and output location.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Endpoint receiving the export request.
    pub url: String,
    /// Prefix under which each export run is stored; the snapshot
    /// timestamp is appended per run.
    pub output_prefix: String,
}

/// Failures while triggering an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// No export target is configured for this deployment.
    #[error("no export target is configured")]
    NotConfigured,

    /// The request never produced an answer.
    #[error("export request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with something other than 200.
    #[error("export rejected with status {status}: {body}")]
    Rejected {
        /// HTTP status of the rejection.
        status: u16,
        /// Response body, kept for the error log.
        body: String,
    },

    /// The outbound token provider failed.
    #[error("export token provider failed: {0}")]
    TokenProvider(String),
}

/// Client that triggers managed exports of the user database.
pub struct ExportClient {
    http: reqwest::Client,
    config: Option<ExportConfig>,
    token_provider: Option<Arc<dyn TokenProvider>>,
}

impl ExportClient {
    /// Creates the client. A `None` config is valid: every trigger then
    /// fails with [`ExportError::NotConfigured`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(
        config: Option<ExportConfig>,
        token_provider: Option<Arc<dyn TokenProvider>>,
    ) -> Result<Self, ExportError> {
        let http = reqwest::Client::builder().timeout(EXPORT_TIMEOUT).build()?;
        Ok(Self {
            http,
            config,
            token_provider,
        })
    }

    /// Triggers an export stamped with today's canonical snapshot time.
    ///
    /// # Errors
    ///
    /// Returns an error when no target is configured, the request cannot
    /// be delivered, or the endpoint answers anything but 200.
    pub async fn export(&self) -> Result<(), ExportError> {
        self.export_at(Utc::now()).await
    }

    async fn export_at(&self, now: DateTime<Utc>) -> Result<(), ExportError> {
        let config = self.config.as_ref().ok_or(ExportError::NotConfigured)?;

        let snapshot = snapshot_time(now);
        let payload = serde_json::json!({
            "outputUriPrefix": format!("{}/{snapshot}", config.output_prefix),
            "snapshotTime": snapshot,
        });

        let mut request = self.http.post(&config.url).json(&payload);
        if let Some(provider) = &self.token_provider {
            let token = provider
                .token()
                .await
                .map_err(|err| ExportError::TokenProvider(err.to_string()))?;
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if status == StatusCode::OK {
            Ok(())
        } else {
            Err(ExportError::Rejected {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            })
        }
    }
}

/// Canonical snapshot timestamp: the request day at 07:00:00 UTC.
///
/// Pinning the time of day makes reruns within a day land on the same
/// output path instead of fanning out per call.
fn snapshot_time(now: DateTime<Utc>) -> String {
    format!("{}T07:00:00Z", now.date_naive())
}
