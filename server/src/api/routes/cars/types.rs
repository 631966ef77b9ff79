//! Car API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::constants::MAX_SEARCH_LEN;
use crate::data::types::{CarRow, ColumnInfo};

/// Electric car DTO for API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct CarDto {
    pub id: i64,
    pub brand: Option<String>,
    pub model: Option<String>,
    /// 0-100 km/h in seconds
    pub accel_sec: Option<f64>,
    pub top_speed_kmh: Option<i64>,
    pub range_km: Option<i64>,
    pub efficiency_whkm: Option<i64>,
    pub fast_charge_kmh: Option<i64>,
    pub rapid_charge: Option<String>,
    pub power_train: Option<String>,
    pub plug_type: Option<String>,
    pub body_style: Option<String>,
    pub segment: Option<String>,
    pub seats: Option<i64>,
    pub price_euro: Option<i64>,
    pub date: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<CarRow> for CarDto {
    fn from(row: CarRow) -> Self {
        Self {
            id: row.id,
            brand: row.brand,
            model: row.model,
            accel_sec: row.accel_sec,
            top_speed_kmh: row.top_speed_kmh,
            range_km: row.range_km,
            efficiency_whkm: row.efficiency_whkm,
            fast_charge_kmh: row.fast_charge_kmh,
            rapid_charge: row.rapid_charge,
            power_train: row.power_train,
            plug_type: row.plug_type,
            body_style: row.body_style,
            segment: row.segment,
            seats: row.seats,
            price_euro: row.price_euro,
            date: row.date,
            created_at: DateTime::from_timestamp(row.created_at, 0).unwrap_or_default(),
        }
    }
}

/// Column metadata in `DESCRIBE` shape
#[derive(Debug, Serialize, ToSchema)]
pub struct ColumnDto {
    #[serde(rename = "Field")]
    pub field: &'static str,
    #[serde(rename = "Type")]
    pub sql_type: &'static str,
    /// `YES` or `NO`
    #[serde(rename = "Null")]
    pub null: &'static str,
    #[serde(rename = "Key")]
    pub key: &'static str,
    #[serde(rename = "Default")]
    pub default: Option<&'static str>,
    #[serde(rename = "Extra")]
    pub extra: &'static str,
}

impl From<ColumnInfo> for ColumnDto {
    fn from(info: ColumnInfo) -> Self {
        Self {
            field: info.field,
            sql_type: info.sql_type,
            null: if info.nullable { "YES" } else { "NO" },
            key: info.key,
            default: info.default,
            extra: info.extra,
        }
    }
}

/// Query params for listing cars
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct ListCarsQuery {
    /// Free text matched against brand, model, body style, segment and power train
    #[validate(length(max = MAX_SEARCH_LEN, message = "Search term must be at most 200 characters"))]
    pub search: Option<String>,

    /// JSON array of `{column, operator, value}` filters
    pub filters: Option<String>,
}
