//! HTTP server: shared state, router construction, and the run loop.

pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::auth::TokenCodec;
use crate::config::Config;
use crate::store::{QuestionStore, UserStore};

/// Shared state for request handlers.
#[derive(Debug)]
pub struct AppState {
    /// Server configuration.
    pub config: Config,

    /// User store.
    pub users: UserStore,

    /// Question store.
    pub questions: QuestionStore,

    /// Session token codec.
    pub codec: TokenCodec,

    /// Outbound HTTP client for provider calls.
    pub http: reqwest::Client,
}

impl AppState {
    /// Build the shared state, including the outbound client with its
    /// provider timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            codec: TokenCodec::new(&config.token_secret),
            users: UserStore::new(),
            questions: QuestionStore::new(),
            config,
            http,
        })
    }
}

/// Run the server until CTRL+C.
///
/// # Errors
///
/// Returns error on bind or server failure.
pub async fn run(config: Config, port: u16) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(config)?);
    let router = routes::create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.expect("Failed to install CTRL+C handler");
    tracing::info!("Received shutdown signal");
}
