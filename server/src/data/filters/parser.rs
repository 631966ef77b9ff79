//! Filter parsing
//!
//! Decodes the `filters` query parameter and validates filter specs into a
//! [`Predicate`].

use super::columns::Column;
use super::types::{CompareOp, Condition, FilterError, FilterOp, FilterSpec, Operator, Predicate};
use crate::core::constants::{MAX_FILTER_JSON_SIZE, MAX_FILTERS};
use crate::utils::number::parse_finite;

/// Strictly decode a JSON array of filter specs
///
/// Size and count limits are enforced here; a payload that is not a JSON
/// array of filter objects yields [`FilterError::MalformedPayload`].
pub fn decode_filter_payload(raw: &str) -> Result<Vec<FilterSpec>, FilterError> {
    if raw.len() > MAX_FILTER_JSON_SIZE {
        return Err(FilterError::PayloadTooLarge {
            max: MAX_FILTER_JSON_SIZE,
        });
    }

    let filters: Vec<FilterSpec> =
        serde_json::from_str(raw).map_err(|e| FilterError::MalformedPayload(e.to_string()))?;

    if filters.len() > MAX_FILTERS {
        return Err(FilterError::TooManyFilters { max: MAX_FILTERS });
    }

    Ok(filters)
}

/// Decode the `filters` query parameter
///
/// A blank payload is no filters. A malformed payload is logged and treated
/// as no filters; oversized payloads are still rejected.
pub fn parse_filter_payload(raw: &str) -> Result<Vec<FilterSpec>, FilterError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    match decode_filter_payload(raw) {
        Ok(filters) => Ok(filters),
        Err(FilterError::MalformedPayload(reason)) => {
            tracing::warn!(%reason, "Ignoring malformed filters payload");
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

/// Validate a search term and filter specs into a predicate
///
/// Unknown columns, missing values and non-numeric comparison operands fail
/// the whole request. Unknown operators are dropped and reported in
/// [`Predicate::skipped`].
pub fn build_predicate(
    search: Option<&str>,
    filters: &[FilterSpec],
) -> Result<Predicate, FilterError> {
    let search = search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let mut conditions = Vec::with_capacity(filters.len());
    let mut skipped = Vec::new();

    for spec in filters {
        let column = Column::parse(&spec.column)
            .ok_or_else(|| FilterError::UnknownColumn(spec.column.clone()))?;

        let Some(operator) = Operator::parse(&spec.operator) else {
            tracing::warn!(
                column = %spec.column,
                operator = %spec.operator,
                "Skipping filter with unknown operator"
            );
            skipped.push(FilterError::UnknownOperator {
                column: spec.column.clone(),
                operator: spec.operator.clone(),
            });
            continue;
        };

        conditions.push(Condition {
            column,
            op: resolve_op(spec, operator)?,
        });
    }

    Ok(Predicate {
        search,
        conditions,
        skipped,
    })
}

fn resolve_op(spec: &FilterSpec, operator: Operator) -> Result<FilterOp, FilterError> {
    let compare = match operator {
        Operator::IsEmpty => return Ok(FilterOp::IsEmpty),
        Operator::IsNotEmpty => return Ok(FilterOp::IsNotEmpty),
        Operator::Contains => return Ok(FilterOp::Contains(required_value(spec)?)),
        Operator::Equals => return Ok(FilterOp::Equals(required_value(spec)?)),
        Operator::StartsWith => return Ok(FilterOp::StartsWith(required_value(spec)?)),
        Operator::EndsWith => return Ok(FilterOp::EndsWith(required_value(spec)?)),
        Operator::GreaterThan => CompareOp::Gt,
        Operator::LessThan => CompareOp::Lt,
        Operator::GreaterThanOrEqual => CompareOp::Gte,
        Operator::LessThanOrEqual => CompareOp::Lte,
    };

    let value = required_value(spec)?;
    let operand = parse_finite(&value).ok_or_else(|| FilterError::ValueType {
        column: spec.column.clone(),
        operator: spec.operator.clone(),
        value,
    })?;

    Ok(FilterOp::Compare(compare, operand))
}

fn required_value(spec: &FilterSpec) -> Result<String, FilterError> {
    spec.value.clone().ok_or_else(|| FilterError::MissingValue {
        column: spec.column.clone(),
        operator: spec.operator.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_valid_payload() {
        let json = r#"[
            {"column": "brand", "operator": "equals", "value": "Tesla"},
            {"column": "price_euro", "operator": "lessThan", "value": 50000}
        ]"#;
        let filters = decode_filter_payload(json).unwrap();
        assert_eq!(filters.len(), 2);
        assert_eq!(filters[1].value.as_deref(), Some("50000"));
    }

    #[test]
    fn decode_rejects_non_array() {
        let result = decode_filter_payload(r#"{"column": "brand"}"#);
        assert!(matches!(result, Err(FilterError::MalformedPayload(_))));
    }

    #[test]
    fn parse_malformed_payload_is_empty() {
        assert!(parse_filter_payload("not valid json").unwrap().is_empty());
        assert!(parse_filter_payload(r#"{"a": 1}"#).unwrap().is_empty());
        assert!(parse_filter_payload(r#"[{"operator": "equals"}]"#).unwrap().is_empty());
    }

    #[test]
    fn parse_blank_payload_is_empty() {
        assert!(parse_filter_payload("").unwrap().is_empty());
        assert!(parse_filter_payload("   ").unwrap().is_empty());
        assert!(parse_filter_payload("[]").unwrap().is_empty());
    }

    #[test]
    fn parse_rejects_oversized_payload() {
        let json = format!(
            r#"[{{"column": "brand", "operator": "contains", "value": "{}"}}]"#,
            "x".repeat(MAX_FILTER_JSON_SIZE)
        );
        assert_eq!(
            parse_filter_payload(&json),
            Err(FilterError::PayloadTooLarge {
                max: MAX_FILTER_JSON_SIZE
            })
        );
    }

    #[test]
    fn parse_rejects_too_many_filters() {
        let one = r#"{"column": "brand", "operator": "isNotEmpty"}"#;
        let json = format!("[{}]", vec![one; MAX_FILTERS + 1].join(","));
        assert_eq!(
            parse_filter_payload(&json),
            Err(FilterError::TooManyFilters { max: MAX_FILTERS })
        );

        let json = format!("[{}]", vec![one; MAX_FILTERS].join(","));
        assert_eq!(parse_filter_payload(&json).unwrap().len(), MAX_FILTERS);
    }

    #[test]
    fn build_empty_is_match_all() {
        let predicate = build_predicate(None, &[]).unwrap();
        assert!(predicate.is_match_all());

        let predicate = build_predicate(Some("   "), &[]).unwrap();
        assert!(predicate.is_match_all());
    }

    #[test]
    fn build_trims_search() {
        let predicate = build_predicate(Some("  tesla "), &[]).unwrap();
        assert_eq!(predicate.search.as_deref(), Some("tesla"));
    }

    #[test]
    fn build_preserves_condition_order() {
        let filters = vec![
            FilterSpec::new("seats", "greaterThanOrEqual", Some("5")),
            FilterSpec::new("brand", "startsWith", Some("Te")),
            FilterSpec::new("rapid_charge", "isEmpty", None),
        ];
        let predicate = build_predicate(None, &filters).unwrap();
        assert_eq!(
            predicate.conditions,
            vec![
                Condition {
                    column: Column::Seats,
                    op: FilterOp::Compare(CompareOp::Gte, 5.0),
                },
                Condition {
                    column: Column::Brand,
                    op: FilterOp::StartsWith("Te".to_string()),
                },
                Condition {
                    column: Column::RapidCharge,
                    op: FilterOp::IsEmpty,
                },
            ]
        );
    }

    #[test]
    fn build_rejects_unknown_column() {
        let filters = vec![
            FilterSpec::new("brand", "equals", Some("Tesla")),
            FilterSpec::new("brand; DROP TABLE electric_cars", "equals", Some("x")),
        ];
        assert_eq!(
            build_predicate(None, &filters),
            Err(FilterError::UnknownColumn(
                "brand; DROP TABLE electric_cars".to_string()
            ))
        );
    }

    #[test]
    fn build_rejects_created_at() {
        let filters = vec![FilterSpec::new("created_at", "isNotEmpty", None)];
        assert!(matches!(
            build_predicate(None, &filters),
            Err(FilterError::UnknownColumn(_))
        ));
    }

    #[test]
    fn build_skips_unknown_operator() {
        let filters = vec![
            FilterSpec::new("brand", "like", Some("T%")),
            FilterSpec::new("seats", "equals", Some("5")),
        ];
        let predicate = build_predicate(None, &filters).unwrap();
        assert_eq!(predicate.conditions.len(), 1);
        assert_eq!(
            predicate.skipped,
            vec![FilterError::UnknownOperator {
                column: "brand".to_string(),
                operator: "like".to_string(),
            }]
        );
    }

    #[test]
    fn build_requires_value() {
        let filters = vec![FilterSpec::new("brand", "contains", None)];
        assert_eq!(
            build_predicate(None, &filters),
            Err(FilterError::MissingValue {
                column: "brand".to_string(),
                operator: "contains".to_string(),
            })
        );
    }

    #[test]
    fn build_ignores_value_for_empty_checks() {
        let filters = vec![FilterSpec::new("segment", "isNotEmpty", Some("whatever"))];
        let predicate = build_predicate(None, &filters).unwrap();
        assert_eq!(predicate.conditions[0].op, FilterOp::IsNotEmpty);
    }

    #[test]
    fn build_rejects_non_numeric_comparison() {
        for value in ["cheap", "", "40k", "NaN", "inf"] {
            let filters = vec![FilterSpec::new("price_euro", "lessThan", Some(value))];
            assert!(
                matches!(
                    build_predicate(None, &filters),
                    Err(FilterError::ValueType { .. })
                ),
                "value {value:?} should be rejected"
            );
        }
    }

    #[test]
    fn build_accepts_decimal_comparison() {
        let filters = vec![FilterSpec::new("accel_sec", "lessThanOrEqual", Some(" 4.5 "))];
        let predicate = build_predicate(None, &filters).unwrap();
        assert_eq!(
            predicate.conditions[0].op,
            FilterOp::Compare(CompareOp::Lte, 4.5)
        );
    }
}
