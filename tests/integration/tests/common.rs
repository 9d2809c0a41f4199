//! Common test utilities and fixtures.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use ed25519_dalek::pkcs8::spki::der::pem::LineEnding;
use ed25519_dalek::pkcs8::{EncodePrivateKey, EncodePublicKey};
use ed25519_dalek::SigningKey;
use rand::rngs::OsRng;
use reqwest::Client;
use serde_json::{json, Value};
use tokio::time::sleep;
use uuid::{uuid, Uuid};

use uas_auth::gateway::USERINFO_HEADER;
use uas_server::{Server, ServerConfig};
use uas_storage_mongo::{connect, MongoConfig};

/// The one tenant the stub client directory answers for.
pub const KNOWN_CLIENT: Uuid = uuid!("9d9ebbc1-4f80-4e9b-9c0d-3abc0f7f1d5e");

/// Password used by the registration helper.
pub const PASSWORD: &str = "correct horse battery";

/// Test environment that manages the server and its stub dependencies.
pub struct TestEnv {
    /// Base URL of the running server.
    pub base_url: String,
    /// HTTP client for testing.
    pub client: Client,
    /// Public half of the session signing key, PEM-encoded.
    pub public_key_pem: String,
    mongo: MongoConfig,
    export_log: ExportLog,
}

impl TestEnv {
    /// Boots the server against a scratch database.
    ///
    /// Returns `None` (after printing a notice) when `MONGODB_URI` is not
    /// set, so the suite degrades to a skip instead of a failure on
    /// machines without a deployment.
    pub async fn new() -> anyhow::Result<Option<Self>> {
        let Ok(uri) = std::env::var("MONGODB_URI") else {
            eprintln!("skipping: set MONGODB_URI to run end-to-end tests");
            return Ok(None);
        };

        // try_init: a prior test in the binary may already hold the
        // global subscriber.
        let _ = tracing_subscriber::fmt()
            .with_env_filter("uas_server=debug,uas_api=debug")
            .try_init();

        let directory_url =
            spawn_stub(Router::new().route("/api/v1/clients/{id}", get(serve_client))).await?;

        let export_log = ExportLog::default();
        let export_base = spawn_stub(
            Router::new()
                .route("/export", post(record_export))
                .with_state(export_log.clone()),
        )
        .await?;

        let key = SigningKey::generate(&mut OsRng);
        let private_key_pem = key
            .to_pkcs8_pem(LineEnding::LF)
            .expect("encode private key")
            .to_string();
        let public_key_pem = key
            .verifying_key()
            .to_public_key_pem(LineEnding::LF)
            .expect("encode public key");

        let mongo = MongoConfig {
            uri,
            database: format!("uas_e2e_{}", Uuid::new_v4().simple()),
        };

        let config = ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 0,
            mongo: mongo.clone(),
            jwt_issuer: "https://accounts.test".to_owned(),
            jwt_private_key: private_key_pem,
            client_directory_url: directory_url,
            client_directory_token: None,
            export_url: Some(format!("{export_base}/export")),
            export_output_prefix: Some("gs://uas-backups/users".to_owned()),
            export_token: None,
        };

        let server = Server::bind(config).await?;
        let base_url = format!("http://{}", server.local_addr()?);
        tokio::spawn(async move {
            if let Err(err) = server.run().await {
                tracing::error!("server error: {err}");
            }
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;
        wait_for_server(&client, &base_url).await?;

        Ok(Some(Self {
            base_url,
            client,
            public_key_pem,
            mongo,
            export_log,
        }))
    }

    /// POSTs a JSON body and returns the status with the parsed response.
    pub async fn post(&self, path: &str, body: Value) -> anyhow::Result<(StatusCode, Value)> {
        let response = self
            .client
            .post(format!("{}{path}", self.base_url))
            .json(&body)
            .send()
            .await?;
        read(response).await
    }

    /// GETs a path and returns the status with the parsed response.
    pub async fn get(&self, path: &str) -> anyhow::Result<(StatusCode, Value)> {
        let response = self
            .client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await?;
        read(response).await
    }

    /// GETs a path with a gateway userinfo header attached.
    pub async fn get_as(
        &self,
        path: &str,
        userinfo: &str,
    ) -> anyhow::Result<(StatusCode, Value)> {
        let response = self
            .client
            .get(format!("{}{path}", self.base_url))
            .header(USERINFO_HEADER, userinfo)
            .send()
            .await?;
        read(response).await
    }

    /// Registers a user under [`KNOWN_CLIENT`] and returns the projection.
    pub async fn register(&self, name: &str, email: &str) -> anyhow::Result<Value> {
        let (status, body) = self
            .post(
                "/api/v1/users",
                json!({
                    "clientId": KNOWN_CLIENT,
                    "name": name,
                    "email": email,
                    "password": PASSWORD,
                }),
            )
            .await?;
        anyhow::ensure!(status == StatusCode::CREATED, "registration failed: {body}");
        Ok(body)
    }

    /// Bodies the export stub has received so far.
    pub fn export_requests(&self) -> Vec<Value> {
        self.export_log.0.lock().unwrap().clone()
    }

    /// Drops the scratch database.
    pub async fn teardown(self) -> anyhow::Result<()> {
        connect(&self.mongo).await?.drop().await?;
        Ok(())
    }
}

/// Encodes a gateway userinfo header for the given identity.
pub fn userinfo(user_id: &str, client_id: &str) -> String {
    URL_SAFE_NO_PAD.encode(json!({ "sub": user_id, "cid": client_id, "aud": "user" }).to_string())
}

async fn read(response: reqwest::Response) -> anyhow::Result<(StatusCode, Value)> {
    let status = response.status();
    let text = response.text().await?;
    let body = if text.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&text)?
    };
    Ok((status, body))
}

/// Serves an axum router on an ephemeral port and returns its base URL.
async fn spawn_stub(app: Router) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, app).await {
            tracing::error!("stub server error: {err}");
        }
    });
    Ok(format!("http://{addr}"))
}

async fn serve_client(Path(id): Path<Uuid>) -> Response {
    if id == KNOWN_CLIENT {
        Json(json!({ "id": id, "name": "Acme Telecom" })).into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

#[derive(Clone, Default)]
struct ExportLog(Arc<Mutex<Vec<Value>>>);

async fn record_export(State(log): State<ExportLog>, Json(payload): Json<Value>) -> Json<Value> {
    log.0.lock().unwrap().push(payload);
    Json(json!({ "name": "operations/export-1" }))
}

/// Waits for the server to answer its health endpoint.
async fn wait_for_server(client: &Client, base_url: &str) -> anyhow::Result<()> {
    let health_url = format!("{base_url}/api/v1/health/user");
    let max_attempts = 50;

    for attempt in 1..=max_attempts {
        match client.get(&health_url).send().await {
            Ok(response) if response.status().is_success() => {
                tracing::info!("server ready after {attempt} attempts");
                return Ok(());
            }
            _ => sleep(Duration::from_millis(100)).await,
        }
    }

    anyhow::bail!("server did not become ready in time")
}
