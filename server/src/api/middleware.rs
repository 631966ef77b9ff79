//! HTTP middleware (CORS, 404 handler)

use axum::extract::Request;
use axum::http::request::Parts;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::response::Response;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::types::error_response;

/// Allowed origins configuration
#[derive(Debug, Clone)]
pub enum AllowedOrigins {
    /// Any origin (no credentials)
    Any,
    /// Exact origin list
    List(Vec<String>),
}

impl AllowedOrigins {
    /// Build from configured origins; empty or containing `*` allows any
    pub fn new(origins: &[String]) -> Self {
        if origins.is_empty() || origins.iter().any(|o| o.trim() == "*") {
            Self::Any
        } else {
            Self::List(
                origins
                    .iter()
                    .map(|o| o.trim().trim_end_matches('/').to_string())
                    .filter(|o| !o.is_empty())
                    .collect(),
            )
        }
    }

    /// Check if an origin is allowed
    pub fn is_allowed(&self, origin: &str) -> bool {
        match self {
            Self::Any => true,
            Self::List(origins) => origins.iter().any(|o| o == origin),
        }
    }
}

/// Create CORS layer
pub fn cors(allowed: &AllowedOrigins) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ORIGIN,
            header::CACHE_CONTROL,
        ]);

    match allowed {
        AllowedOrigins::Any => layer.allow_origin(Any),
        AllowedOrigins::List(_) => {
            let allowed = allowed.clone();
            layer.allow_origin(AllowOrigin::predicate(
                move |origin: &HeaderValue, _: &Parts| {
                    origin.to_str().is_ok_and(|o| allowed.is_allowed(o))
                },
            ))
        }
    }
}

/// Handle 404 Not Found with logging
pub async fn handle_404(req: Request) -> Response {
    tracing::debug!(method = %req.method(), uri = %req.uri(), "[404] No route");
    error_response(
        StatusCode::NOT_FOUND,
        "not_found",
        "ROUTE_NOT_FOUND",
        &format!("No route for {} {}", req.method(), req.uri().path()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_origins_default_any() {
        let allowed = AllowedOrigins::new(&[]);
        assert!(matches!(allowed, AllowedOrigins::Any));
        assert!(allowed.is_allowed("http://anything.example"));
    }

    #[test]
    fn test_allowed_origins_wildcard() {
        let allowed = AllowedOrigins::new(&["http://a".to_string(), "*".to_string()]);
        assert!(matches!(allowed, AllowedOrigins::Any));
    }

    #[test]
    fn test_allowed_origins_list() {
        let allowed = AllowedOrigins::new(&[
            "http://localhost:3000/".to_string(),
            " https://cars.example ".to_string(),
        ]);
        assert!(allowed.is_allowed("http://localhost:3000"));
        assert!(allowed.is_allowed("https://cars.example"));
        assert!(!allowed.is_allowed("http://evil.example"));
    }
}
