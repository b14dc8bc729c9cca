//! API server initialization

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use super::middleware;
use super::routes::{health, users};
use crate::core::CoreApp;
use crate::core::config::QueryConfig;
use crate::data::SqliteService;

pub struct ApiServer {
    app: CoreApp,
}

impl ApiServer {
    pub fn new(app: CoreApp) -> Self {
        Self { app }
    }

    /// Returns CoreApp for graceful shutdown
    pub async fn start(self) -> Result<CoreApp> {
        let Self { app } = self;

        let shutdown = app.shutdown.clone();

        let host = app.config.server.host.clone();
        let port = app.config.server.port;
        let addr = SocketAddr::new(host.parse()?, port);

        let router = router(app.database.clone(), app.config.query);

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "Server listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown.wait())
            .await?;

        Ok(app)
    }
}

/// Build the full application router
pub fn router(database: Arc<SqliteService>, query: QueryConfig) -> Router {
    Router::new()
        .route(
            "/api/v1/health",
            get(health::health).with_state(database.clone()),
        )
        .nest("/api/v1/users", users::routes(database, query))
        .fallback(middleware::handle_404)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
