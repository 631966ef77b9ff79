//! Shared API types
//!
//! Response envelopes and error handling shared by all endpoints.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::CatalogError;

/// Standard API error response
#[derive(Debug)]
pub enum ApiError {
    BadRequest { code: String, message: String },
    NotFound { code: String, message: String },
    Internal { message: String },
}

impl ApiError {
    pub fn bad_request(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NotFound {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn from_data(e: crate::data::DataError) -> Self {
        tracing::error!(error = %e, backend = e.backend(), "Data error");
        Self::internal("Database operation failed")
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::Filter(e) => Self::bad_request(e.code(), e.to_string()),
            CatalogError::Data(e) => Self::from_data(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, code, message) = match self {
            Self::BadRequest { code, message } => {
                (StatusCode::BAD_REQUEST, "bad_request", code, message)
            }
            Self::NotFound { code, message } => (StatusCode::NOT_FOUND, "not_found", code, message),
            Self::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "INTERNAL".to_string(),
                message,
            ),
        };
        error_response(status, error_type, &code, &message)
    }
}

/// Error envelope shared by handlers and extractor rejections
pub fn error_response(status: StatusCode, error_type: &str, code: &str, message: &str) -> Response {
    (
        status,
        Json(serde_json::json!({
            "success": false,
            "error": error_type,
            "code": code,
            "message": message
        })),
    )
        .into_response()
}

/// List envelope: `{success, count, data}`
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub success: bool,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// Single-item envelope: `{success, data}`
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Confirmation envelope: `{success, message}`
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filters::FilterError;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_filter_error_maps_to_bad_request() {
        let err: ApiError =
            CatalogError::Filter(FilterError::UnknownColumn("price".to_string())).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "bad_request");
        assert_eq!(body["code"], "INVALID_FILTER_COLUMN");
        assert!(body["message"].as_str().unwrap().contains("price"));
    }

    #[tokio::test]
    async fn test_data_error_is_masked() {
        let err: ApiError =
            CatalogError::Data(crate::data::DataError::Sqlite(sqlx::Error::PoolTimedOut)).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["code"], "INTERNAL");
        assert_eq!(body["message"], "Database operation failed");
    }

    #[test]
    fn test_list_response_counts() {
        let list = ListResponse::new(vec![1, 2, 3]);
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "count": 3, "data": [1, 2, 3]}));
    }
}
