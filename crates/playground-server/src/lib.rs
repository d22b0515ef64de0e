//! HTTP presentation layer for the playground
//!
//! Serves the single form page, keeps one [`playground_llm::SessionState`]
//! per browser session, and routes each form action to its handler.

mod error;
mod handlers;
mod render;
mod session;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use playground_config::Config;
use playground_llm::Mediator;
use tower_http::trace::TraceLayer;

pub use error::ServerError;
pub use session::SESSION_COOKIE;

use crate::render::PageRenderer;
use crate::state::AppState;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration, talking to the Google provider
    ///
    /// # Errors
    ///
    /// Returns an error if the page template fails to compile
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Self::with_mediator(config, Mediator::from_config(&config.provider))
    }

    /// Build the server around an existing mediator
    ///
    /// # Errors
    ///
    /// Returns an error if the page template fails to compile
    pub fn with_mediator(config: &Config, mediator: Mediator) -> anyhow::Result<Self> {
        let pages = PageRenderer::new().map_err(|e| anyhow::anyhow!("failed to compile page template: {e}"))?;
        let state = Arc::new(AppState::new(
            &config.server.sessions,
            mediator,
            pages,
            config.provider.default_api_key(),
        ));

        let mut app = Router::new()
            .route("/", get(handlers::index))
            .route("/generate", post(handlers::generate))
            .route("/sample", post(handlers::sample))
            .route("/theme", post(handlers::toggle_theme))
            .with_state(state);

        if config.server.health.enabled {
            app = app.route(&config.server.health.path, get(handlers::health));
        }

        app = app.layer(TraceLayer::new_for_http());

        Ok(Self {
            router: app,
            listen_address: config.server.listen_address(),
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    #[must_use]
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "playground listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
