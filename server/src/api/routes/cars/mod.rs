//! Car catalog API endpoints

pub mod types;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::extractors::{CarPath, ValidatedQuery};
use crate::api::types::{ApiError, DataResponse, ListResponse, MessageResponse};
use crate::data::filters::parse_filter_payload;
use crate::domain::{CatalogError, CatalogService};

use types::{CarDto, ColumnDto, ListCarsQuery};

/// Build Cars API routes
pub fn routes(catalog: CatalogService) -> Router<()> {
    Router::new()
        .route("/", get(list_cars))
        .route("/columns", get(list_columns))
        .route("/{id}", get(get_car).delete(delete_car))
        .with_state(catalog)
}

/// List cars matching an optional search term and filters, ordered by id
#[utoipa::path(
    get,
    path = "/api/cars",
    tag = "cars",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive text matched against brand, model, body_style, segment and power_train"),
        ("filters" = Option<String>, Query, description = "JSON array of {column, operator, value}; all filters must match",
            example = r#"[{"column":"price_euro","operator":"lessThan","value":"40000"}]"#)
    ),
    responses(
        (status = 200, description = "`{success, count, data}` with matching cars", body = [CarDto]),
        (status = 400, description = "Invalid filter column, value, or payload size")
    )
)]
pub async fn list_cars(
    State(catalog): State<CatalogService>,
    ValidatedQuery(query): ValidatedQuery<ListCarsQuery>,
) -> Result<Json<ListResponse<CarDto>>, ApiError> {
    let filters = match query.filters.as_deref() {
        Some(raw) => parse_filter_payload(raw).map_err(CatalogError::from)?,
        None => Vec::new(),
    };

    let rows = catalog.list_cars(query.search.as_deref(), &filters).await?;
    let data: Vec<CarDto> = rows.into_iter().map(CarDto::from).collect();

    Ok(Json(ListResponse::new(data)))
}

/// Describe the columns of the car table
#[utoipa::path(
    get,
    path = "/api/cars/columns",
    tag = "cars",
    responses(
        (status = 200, description = "`{success, data}` with column metadata", body = [ColumnDto])
    )
)]
pub async fn list_columns(State(catalog): State<CatalogService>) -> Json<DataResponse<Vec<ColumnDto>>> {
    let columns = catalog.columns().into_iter().map(ColumnDto::from).collect();
    Json(DataResponse::new(columns))
}

/// Get a single car by id
#[utoipa::path(
    get,
    path = "/api/cars/{id}",
    tag = "cars",
    params(("id" = i64, Path, description = "Car id")),
    responses(
        (status = 200, description = "`{success, data}` with the car", body = CarDto),
        (status = 400, description = "Id is not a positive integer"),
        (status = 404, description = "Car not found")
    )
)]
pub async fn get_car(
    State(catalog): State<CatalogService>,
    CarPath { id }: CarPath,
) -> Result<Json<DataResponse<CarDto>>, ApiError> {
    let car = catalog
        .get_car(id)
        .await?
        .ok_or_else(|| ApiError::not_found("CAR_NOT_FOUND", "Car not found"))?;

    Ok(Json(DataResponse::new(CarDto::from(car))))
}

/// Delete a car by id
#[utoipa::path(
    delete,
    path = "/api/cars/{id}",
    tag = "cars",
    params(("id" = i64, Path, description = "Car id")),
    responses(
        (status = 200, description = "Car deleted", body = MessageResponse),
        (status = 400, description = "Id is not a positive integer"),
        (status = 404, description = "Car not found")
    )
)]
pub async fn delete_car(
    State(catalog): State<CatalogService>,
    CarPath { id }: CarPath,
) -> Result<Json<MessageResponse>, ApiError> {
    if !catalog.delete_car(id).await? {
        return Err(ApiError::not_found("CAR_NOT_FOUND", "Car not found"));
    }
    Ok(Json(MessageResponse::new("Car deleted successfully")))
}
