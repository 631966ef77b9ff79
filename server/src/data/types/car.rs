//! Electric car record types

use serde::{Deserialize, Serialize};

use crate::data::filters::Column;

/// Electric car row from the `electric_cars` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CarRow {
    pub id: i64,
    pub brand: Option<String>,
    pub model: Option<String>,
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
    /// Unix timestamp (seconds), set once at insert
    pub created_at: i64,
}

/// Typed view of a single field, borrowed from a row
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Integer(Option<i64>),
    Real(Option<f64>),
    Text(Option<&'a str>),
}

impl FieldValue<'_> {
    pub fn is_null(&self) -> bool {
        match self {
            Self::Integer(v) => v.is_none(),
            Self::Real(v) => v.is_none(),
            Self::Text(v) => v.is_none(),
        }
    }
}

impl CarRow {
    /// Accessor for a filterable column
    pub fn field(&self, column: Column) -> FieldValue<'_> {
        match column {
            Column::Id => FieldValue::Integer(Some(self.id)),
            Column::Brand => FieldValue::Text(self.brand.as_deref()),
            Column::Model => FieldValue::Text(self.model.as_deref()),
            Column::AccelSec => FieldValue::Real(self.accel_sec),
            Column::TopSpeedKmh => FieldValue::Integer(self.top_speed_kmh),
            Column::RangeKm => FieldValue::Integer(self.range_km),
            Column::EfficiencyWhkm => FieldValue::Integer(self.efficiency_whkm),
            Column::FastChargeKmh => FieldValue::Integer(self.fast_charge_kmh),
            Column::RapidCharge => FieldValue::Text(self.rapid_charge.as_deref()),
            Column::PowerTrain => FieldValue::Text(self.power_train.as_deref()),
            Column::PlugType => FieldValue::Text(self.plug_type.as_deref()),
            Column::BodyStyle => FieldValue::Text(self.body_style.as_deref()),
            Column::Segment => FieldValue::Text(self.segment.as_deref()),
            Column::Seats => FieldValue::Integer(self.seats),
            Column::PriceEuro => FieldValue::Integer(self.price_euro),
            Column::Date => FieldValue::Text(self.date.as_deref()),
        }
    }
}

/// New car for insertion (id and created_at are assigned by the store)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewCar {
    pub brand: Option<String>,
    pub model: Option<String>,
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
}

impl NewCar {
    /// Materialize as a stored row
    pub fn into_row(self, id: i64, created_at: i64) -> CarRow {
        CarRow {
            id,
            brand: self.brand,
            model: self.model,
            accel_sec: self.accel_sec,
            top_speed_kmh: self.top_speed_kmh,
            range_km: self.range_km,
            efficiency_whkm: self.efficiency_whkm,
            fast_charge_kmh: self.fast_charge_kmh,
            rapid_charge: self.rapid_charge,
            power_train: self.power_train,
            plug_type: self.plug_type,
            body_style: self.body_style,
            segment: self.segment,
            seats: self.seats,
            price_euro: self.price_euro,
            date: self.date,
            created_at,
        }
    }
}

/// Column metadata (`DESCRIBE`-style)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnInfo {
    pub field: &'static str,
    pub sql_type: &'static str,
    pub nullable: bool,
    pub key: &'static str,
    pub default: Option<&'static str>,
    pub extra: &'static str,
}

/// Metadata for every column of the `electric_cars` table, in table order
pub fn describe_columns() -> Vec<ColumnInfo> {
    let mut columns: Vec<ColumnInfo> = Column::ALL
        .iter()
        .map(|c| match c {
            Column::Id => ColumnInfo {
                field: c.as_str(),
                sql_type: c.sql_type(),
                nullable: false,
                key: "PRI",
                default: None,
                extra: "auto_increment",
            },
            _ => ColumnInfo {
                field: c.as_str(),
                sql_type: c.sql_type(),
                nullable: true,
                key: "",
                default: None,
                extra: "",
            },
        })
        .collect();

    columns.push(ColumnInfo {
        field: "created_at",
        sql_type: "INTEGER",
        nullable: false,
        key: "",
        default: Some("strftime('%s', 'now')"),
        extra: "",
    });

    columns
}
