//! API server initialization

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use super::middleware::{self, AllowedOrigins};
use super::openapi::{openapi_json, swagger_ui_html};
use super::routes::{cars, health};
use crate::core::CoreApp;
use crate::core::constants::DEFAULT_BODY_LIMIT;
use crate::domain::CatalogService;

pub struct ApiServer {
    app: CoreApp,
    allowed_origins: AllowedOrigins,
}

impl ApiServer {
    pub fn new(app: CoreApp) -> Self {
        let allowed_origins = AllowedOrigins::new(&app.config.server.cors_origins);
        Self {
            app,
            allowed_origins,
        }
    }

    /// Returns CoreApp for graceful shutdown
    pub async fn start(self) -> Result<CoreApp> {
        let Self {
            app,
            allowed_origins,
        } = self;

        let shutdown = app.shutdown.clone();
        let host = app.config.server.host.clone();
        let port = app.config.server.port;

        let router = build_router(app.catalog.clone(), &allowed_origins);

        let listener = TcpListener::bind((host.as_str(), port))
            .await
            .with_context(|| format!("Failed to bind {}:{}", host, port))?;
        tracing::debug!(addr = ?listener.local_addr().ok(), "Listening");

        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown.wait())
        .await?;

        Ok(app)
    }
}

/// Assemble the full HTTP router
pub fn build_router(catalog: CatalogService, allowed_origins: &AllowedOrigins) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/api/health", get(health::health).with_state(catalog.clone()))
        .route("/api-docs.json", get(openapi_json))
        .route("/api-docs", get(swagger_ui_html))
        .nest("/api/cars", cars::routes(catalog))
        .fallback(middleware::handle_404)
        .layer(CompressionLayer::new())
        .layer(middleware::cors(allowed_origins))
        .layer(DefaultBodyLimit::max(DEFAULT_BODY_LIMIT))
        .layer(TraceLayer::new_for_http())
}
