//! Health check endpoints

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::CatalogService;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Number of cars in the catalog
    pub cars: u64,
}

/// Plain-text liveness message
pub async fn root() -> &'static str {
    "Electric car catalog API is running"
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Database unavailable")
    )
)]
pub async fn health(State(catalog): State<CatalogService>) -> Response {
    match catalog.repository().count_cars().await {
        Ok(cars) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                version: env!("CARGO_PKG_VERSION"),
                cars,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "status": "unavailable",
                    "version": env!("CARGO_PKG_VERSION"),
                })),
            )
                .into_response()
        }
    }
}
