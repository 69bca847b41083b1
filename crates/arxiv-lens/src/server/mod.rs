//! HTTP server.
//!
//! Both pipelines are built once at startup and shared by every request.

pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::search::SearchService;
use crate::translate::Translator;

/// State shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Search + suggest pipeline.
    pub search: SearchService,

    /// Translation pipeline.
    pub translator: Translator,
}

/// arXiv Lens HTTP server.
#[derive(Debug)]
pub struct Server {
    state: Arc<AppState>,
}

impl Server {
    /// Create a server from the two pipelines.
    #[must_use]
    pub fn new(search: SearchService, translator: Translator) -> Self {
        Self { state: Arc::new(AppState { search, translator }) }
    }

    /// The router, for embedding or testing.
    #[must_use]
    pub fn router(&self) -> axum::Router {
        routes::create_router(Arc::clone(&self.state))
    }

    /// Serve on `addr` until Ctrl+C.
    ///
    /// # Errors
    ///
    /// Returns error on server failure.
    pub async fn run(self, addr: SocketAddr) -> anyhow::Result<()> {
        let router = self.router();

        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("HTTP server listening on http://{}", addr);

        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install CTRL+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
