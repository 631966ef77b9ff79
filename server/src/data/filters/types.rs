//! Filter type definitions
//!
//! Wire-level filter specs as received from callers, and the validated
//! predicate they are turned into.

use std::cmp::Ordering;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use super::columns::Column;

/// One filter condition as sent by a caller
///
/// `value` accepts a JSON string or number; it is ignored by `isEmpty`
/// and `isNotEmpty`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct FilterSpec {
    /// Column name to filter on
    #[schema(example = "price_euro")]
    pub column: String,
    /// Filter operator
    #[schema(example = "lessThan")]
    pub operator: String,
    /// Filter value (not required for isEmpty/isNotEmpty)
    #[serde(default, deserialize_with = "deserialize_filter_value")]
    #[schema(example = "50000")]
    pub value: Option<String>,
}

impl FilterSpec {
    pub fn new(column: &str, operator: &str, value: Option<&str>) -> Self {
        Self {
            column: column.to_string(),
            operator: operator.to_string(),
            value: value.map(str::to_string),
        }
    }
}

fn deserialize_filter_value<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) => Ok(Some(n.to_string())),
        serde_json::Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(serde::de::Error::custom(format!(
            "filter value must be a string or number, got {}",
            other
        ))),
    }
}

/// Filter operators accepted on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Contains,
    Equals,
    StartsWith,
    EndsWith,
    IsEmpty,
    IsNotEmpty,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
}

impl Operator {
    pub const ALL: &'static [Operator] = &[
        Operator::Contains,
        Operator::Equals,
        Operator::StartsWith,
        Operator::EndsWith,
        Operator::IsEmpty,
        Operator::IsNotEmpty,
        Operator::GreaterThan,
        Operator::LessThan,
        Operator::GreaterThanOrEqual,
        Operator::LessThanOrEqual,
    ];

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.as_str() == name)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Contains => "contains",
            Self::Equals => "equals",
            Self::StartsWith => "startsWith",
            Self::EndsWith => "endsWith",
            Self::IsEmpty => "isEmpty",
            Self::IsNotEmpty => "isNotEmpty",
            Self::GreaterThan => "greaterThan",
            Self::LessThan => "lessThan",
            Self::GreaterThanOrEqual => "greaterThanOrEqual",
            Self::LessThanOrEqual => "lessThanOrEqual",
        }
    }
}

/// Numeric comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Gt,
    Lt,
    Gte,
    Lte,
}

impl CompareOp {
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Gte => ">=",
            Self::Lte => "<=",
        }
    }

    /// Whether `lhs op rhs` holds given `lhs.cmp(rhs)`
    pub fn accepts(&self, ord: Ordering) -> bool {
        match self {
            Self::Gt => ord.is_gt(),
            Self::Lt => ord.is_lt(),
            Self::Gte => ord.is_ge(),
            Self::Lte => ord.is_le(),
        }
    }
}

/// Validated operation with its coerced operand
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOp {
    Contains(String),
    Equals(String),
    StartsWith(String),
    EndsWith(String),
    IsEmpty,
    IsNotEmpty,
    Compare(CompareOp, f64),
}

/// A validated filter clause
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub column: Column,
    pub op: FilterOp,
}

/// Composite predicate: search OR-group AND every condition, in order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    /// Trimmed, non-empty search term
    pub search: Option<String>,
    pub conditions: Vec<Condition>,
    /// Filters dropped without emitting a clause (unknown operators)
    pub skipped: Vec<FilterError>,
}

impl Predicate {
    /// Predicate that matches every record
    #[cfg(test)]
    pub fn match_all() -> Self {
        Self::default()
    }

    /// No search term and no conditions
    pub fn is_match_all(&self) -> bool {
        self.search.is_none() && self.conditions.is_empty()
    }
}

/// Errors raised while decoding or validating filters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("Cannot filter by column: {0}")]
    UnknownColumn(String),

    #[error("Unknown filter operator '{operator}' on column {column}")]
    UnknownOperator { column: String, operator: String },

    #[error("Operator {operator} on column {column} requires a value")]
    MissingValue { column: String, operator: String },

    #[error("Operator {operator} on column {column} expects a number, got '{value}'")]
    ValueType {
        column: String,
        operator: String,
        value: String,
    },

    #[error("Malformed filters payload: {0}")]
    MalformedPayload(String),

    #[error("Maximum {max} filters allowed")]
    TooManyFilters { max: usize },

    #[error("Filter JSON exceeds maximum size of {max} bytes")]
    PayloadTooLarge { max: usize },
}

impl FilterError {
    /// Stable machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownColumn(_) => "INVALID_FILTER_COLUMN",
            Self::UnknownOperator { .. } => "INVALID_FILTER_OPERATOR",
            Self::MissingValue { .. } => "MISSING_FILTER_VALUE",
            Self::ValueType { .. } => "INVALID_FILTER_VALUE",
            Self::MalformedPayload(_) => "INVALID_FILTER_JSON",
            Self::TooManyFilters { .. } => "TOO_MANY_FILTERS",
            Self::PayloadTooLarge { .. } => "FILTER_JSON_TOO_LARGE",
        }
    }
}

/// Bound parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    Real(f64),
}

/// Collects SQL parameters during query building (maintains insertion order)
#[derive(Debug, Default)]
pub struct SqlParams {
    pub values: Vec<SqlValue>,
}

impl SqlParams {
    pub fn push_text(&mut self, value: impl Into<String>) {
        self.values.push(SqlValue::Text(value.into()));
    }

    pub fn push_real(&mut self, value: f64) {
        self.values.push(SqlValue::Real(value));
    }
}
