//! # uas-server
//!
//! The user account service binary: wires MongoDB storage, the client
//! directory, the token issuer, and the export client into the
//! [`uas_api`] router and serves it.
//!
//! ## Usage
//!
//! ```ignore
//! use uas_server::{Server, ServerConfig};
//!
//! let config = ServerConfig::from_env()?;
//! let server = Server::bind(config).await?;
//! server.run().await?;
//! ```

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod config;

pub use config::{ConfigError, ServerConfig};

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use uas_api::{api_router, AppState, ExportClient, ExportConfig};
use uas_auth::{PasswordHasherService, TokenIssuer};
use uas_directory::{RestClientDirectory, StaticTokenProvider, TokenProvider};
use uas_storage_mongo::{connect, MongoUserStore};

use axum::Router;

/// The user account server, bound and ready to run.
pub struct Server {
    listener: TcpListener,
    app: Router,
}

impl Server {
    /// Connects the dependencies and binds the listener.
    ///
    /// Binding is separate from [`Server::run`] so callers can bind port
    /// `0` and read the real address back before serving.
    ///
    /// # Errors
    ///
    /// Returns an error when MongoDB is unreachable, the signing key does
    /// not parse, or the address cannot be bound.
    pub async fn bind(config: ServerConfig) -> anyhow::Result<Self> {
        let db = connect(&config.mongo).await?;
        let store = MongoUserStore::new(db);
        store.apply_indexes().await?;
        let store = Arc::new(store);

        let issuer = Arc::new(TokenIssuer::new(
            &config.jwt_issuer,
            &config.jwt_private_key,
        )?);

        let mut directory = RestClientDirectory::new(&config.client_directory_url)?;
        if let Some(token) = &config.client_directory_token {
            directory = directory.with_token_provider(Arc::new(StaticTokenProvider::new(token)));
        }

        let export_config = match (&config.export_url, &config.export_output_prefix) {
            (Some(url), Some(prefix)) => Some(ExportConfig {
                url: url.clone(),
                output_prefix: prefix.clone(),
            }),
            _ => None,
        };
        let export_token = config
            .export_token
            .as_ref()
            .map(|token| Arc::new(StaticTokenProvider::new(token)) as Arc<dyn TokenProvider>);
        let export = Arc::new(ExportClient::new(export_config, export_token)?);

        let state = AppState::new(
            store,
            Arc::new(directory),
            Arc::new(PasswordHasherService::with_defaults()),
            issuer,
            export,
        );
        let app = api_router()
            .with_state(state)
            .layer(TraceLayer::new_for_http());

        let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
        let listener = TcpListener::bind(addr).await?;
        info!("listening on http://{}", listener.local_addr()?);

        Ok(Self { listener, app })
    }

    /// Returns the bound address.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot report its address.
    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves requests until a shutdown signal arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if the server loop fails.
    pub async fn run(self) -> anyhow::Result<()> {
        axum::serve(self.listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("server shutdown complete");
        Ok(())
    }
}

/// Waits for a shutdown signal.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received");
}
