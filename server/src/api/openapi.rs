//! OpenAPI specification and Swagger UI

use axum::http::header;
use axum::response::{Html, IntoResponse, Json};
use utoipa::OpenApi;

use crate::api::routes::{cars, health};
use crate::api::types::MessageResponse;
use crate::data::filters::FilterSpec;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EvGrid API",
        version = env!("CARGO_PKG_VERSION"),
        description = "Electric car catalog with search and column filters"
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "cars", description = "Electric car catalog")
    ),
    paths(
        health::health,
        cars::list_cars,
        cars::list_columns,
        cars::get_car,
        cars::delete_car,
    ),
    components(schemas(
        health::HealthResponse,
        cars::types::CarDto,
        cars::types::ColumnDto,
        cars::types::ListCarsQuery,
        FilterSpec,
        MessageResponse,
    ))
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
pub async fn openapi_json() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        Json(ApiDoc::openapi()),
    )
}

/// Serve Swagger UI from CDN
pub async fn swagger_ui_html() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

const SWAGGER_UI_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>EvGrid API</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
        window.onload = () => {
            window.ui = SwaggerUIBundle({
                url: "/api-docs.json",
                dom_id: '#swagger-ui',
                deepLinking: true
            });
        };
    </script>
</body>
</html>"#;
