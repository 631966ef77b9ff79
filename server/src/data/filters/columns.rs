//! Column allow-list
//!
//! The closed set of `electric_cars` columns a caller may filter or search
//! on. Column names reach SQL only through [`Column::as_str`], so anything
//! that does not parse into a variant never touches query text.

use std::fmt;

/// Storage kind of a column, drives operator semantics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Real,
    Text,
}

impl ColumnKind {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Real)
    }
}

/// Filterable column of the `electric_cars` table
///
/// `created_at` is not filterable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    Brand,
    Model,
    AccelSec,
    TopSpeedKmh,
    RangeKm,
    EfficiencyWhkm,
    FastChargeKmh,
    RapidCharge,
    PowerTrain,
    PlugType,
    BodyStyle,
    Segment,
    Seats,
    PriceEuro,
    Date,
}

impl Column {
    /// Every filterable column, in table order
    pub const ALL: &'static [Column] = &[
        Column::Id,
        Column::Brand,
        Column::Model,
        Column::AccelSec,
        Column::TopSpeedKmh,
        Column::RangeKm,
        Column::EfficiencyWhkm,
        Column::FastChargeKmh,
        Column::RapidCharge,
        Column::PowerTrain,
        Column::PlugType,
        Column::BodyStyle,
        Column::Segment,
        Column::Seats,
        Column::PriceEuro,
        Column::Date,
    ];

    /// Columns scanned by the free-text search
    pub const SEARCHABLE: &'static [Column] = &[
        Column::Brand,
        Column::Model,
        Column::BodyStyle,
        Column::Segment,
        Column::PowerTrain,
    ];

    /// Exact, case-sensitive lookup of a caller-supplied column name
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == name)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Brand => "brand",
            Self::Model => "model",
            Self::AccelSec => "accel_sec",
            Self::TopSpeedKmh => "top_speed_kmh",
            Self::RangeKm => "range_km",
            Self::EfficiencyWhkm => "efficiency_whkm",
            Self::FastChargeKmh => "fast_charge_kmh",
            Self::RapidCharge => "rapid_charge",
            Self::PowerTrain => "power_train",
            Self::PlugType => "plug_type",
            Self::BodyStyle => "body_style",
            Self::Segment => "segment",
            Self::Seats => "seats",
            Self::PriceEuro => "price_euro",
            Self::Date => "date",
        }
    }

    pub const fn kind(&self) -> ColumnKind {
        match self {
            Self::Id
            | Self::TopSpeedKmh
            | Self::RangeKm
            | Self::EfficiencyWhkm
            | Self::FastChargeKmh
            | Self::Seats
            | Self::PriceEuro => ColumnKind::Integer,
            Self::AccelSec => ColumnKind::Real,
            Self::Brand
            | Self::Model
            | Self::RapidCharge
            | Self::PowerTrain
            | Self::PlugType
            | Self::BodyStyle
            | Self::Segment
            | Self::Date => ColumnKind::Text,
        }
    }

    /// Declared SQL type, as reported by the column metadata endpoint
    pub const fn sql_type(&self) -> &'static str {
        match self {
            Self::Id => "INTEGER",
            Self::AccelSec => "REAL",
            Self::Brand | Self::Model => "TEXT(100)",
            Self::RapidCharge | Self::Segment => "TEXT(10)",
            Self::PowerTrain | Self::PlugType | Self::BodyStyle | Self::Date => "TEXT(50)",
            Self::TopSpeedKmh
            | Self::RangeKm
            | Self::EfficiencyWhkm
            | Self::FastChargeKmh
            | Self::Seats
            | Self::PriceEuro => "INTEGER",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
