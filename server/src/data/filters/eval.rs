//! In-memory predicate evaluation
//!
//! Mirrors the SQL rendered by the builder: LIKE operators are ASCII
//! case-insensitive, NULL never satisfies a value comparison, and numeric
//! comparisons on text columns use the leading-number conversion.

use std::borrow::Cow;
use std::cmp::Ordering;

use super::columns::Column;
use super::types::{Condition, FilterOp, Predicate};
use crate::data::types::{CarRow, FieldValue};
use crate::utils::number::{cmp_int_real, leading_real, parse_finite, render_real};

impl Predicate {
    pub fn matches(&self, row: &CarRow) -> bool {
        if let Some(term) = &self.search {
            let hit = Column::SEARCHABLE
                .iter()
                .any(|c| text_form(row.field(*c)).is_some_and(|t| contains_ci(&t, term)));
            if !hit {
                return false;
            }
        }
        self.conditions.iter().all(|c| c.matches(row))
    }
}

impl Condition {
    pub fn matches(&self, row: &CarRow) -> bool {
        let field = row.field(self.column);

        match &self.op {
            FilterOp::Contains(v) => text_form(field).is_some_and(|t| contains_ci(&t, v)),
            FilterOp::StartsWith(v) => text_form(field).is_some_and(|t| {
                t.to_ascii_lowercase()
                    .starts_with(&v.to_ascii_lowercase())
            }),
            FilterOp::EndsWith(v) => text_form(field)
                .is_some_and(|t| t.to_ascii_lowercase().ends_with(&v.to_ascii_lowercase())),
            FilterOp::Equals(v) => match field {
                FieldValue::Text(t) => t == Some(v.as_str()),
                _ => parse_finite(v)
                    .and_then(|rhs| numeric_cmp(field, rhs))
                    .is_some_and(Ordering::is_eq),
            },
            FilterOp::IsEmpty => is_empty(field),
            FilterOp::IsNotEmpty => !is_empty(field),
            FilterOp::Compare(op, n) => numeric_cmp(field, *n).is_some_and(|ord| op.accepts(ord)),
        }
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}

/// Value as seen by LIKE: numbers are compared by their text rendering
fn text_form(field: FieldValue<'_>) -> Option<Cow<'_, str>> {
    match field {
        FieldValue::Text(t) => t.map(Cow::Borrowed),
        FieldValue::Integer(i) => i.map(|i| Cow::Owned(i.to_string())),
        FieldValue::Real(r) => r.map(|r| Cow::Owned(render_real(r))),
    }
}

/// Ordering of the field against a REAL operand; `None` for NULL
///
/// Integers compare exactly, text goes through `CAST(x AS REAL)`.
fn numeric_cmp(field: FieldValue<'_>, rhs: f64) -> Option<Ordering> {
    match field {
        FieldValue::Integer(i) => i.map(|i| cmp_int_real(i, rhs)),
        FieldValue::Real(r) => r.and_then(|lhs| lhs.partial_cmp(&rhs)),
        FieldValue::Text(t) => t.and_then(|t| leading_real(t).partial_cmp(&rhs)),
    }
}

fn is_empty(field: FieldValue<'_>) -> bool {
    match field {
        FieldValue::Text(t) => t.is_none_or(str::is_empty),
        other => other.is_null(),
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::{CompareOp, FilterSpec};
    use super::super::parser::build_predicate;
    use super::*;
    use crate::data::types::NewCar;

    fn car(id: i64) -> CarRow {
        NewCar {
            brand: Some("Tesla ".to_string()),
            model: Some("Model 3 Long Range Dual Motor".to_string()),
            accel_sec: Some(4.6),
            top_speed_kmh: Some(233),
            range_km: Some(450),
            efficiency_whkm: Some(161),
            fast_charge_kmh: Some(940),
            rapid_charge: Some("Yes".to_string()),
            power_train: Some("AWD".to_string()),
            plug_type: Some("Type 2 CCS".to_string()),
            body_style: Some("Sedan".to_string()),
            segment: Some("D".to_string()),
            seats: Some(5),
            price_euro: Some(55480),
            date: Some("8/24/2016".to_string()),
        }
        .into_row(id, 0)
    }

    fn cond(column: Column, op: FilterOp) -> Condition {
        Condition { column, op }
    }

    #[test]
    fn search_is_case_insensitive_across_columns() {
        let row = car(1);
        for term in ["tesla", "SEDAN", "awd", "model 3"] {
            let predicate = build_predicate(Some(term), &[]).unwrap();
            assert!(predicate.matches(&row), "search {term:?}");
        }
        let predicate = build_predicate(Some("Type 2"), &[]).unwrap();
        assert!(!predicate.matches(&row), "plug_type is not searchable");
    }

    #[test]
    fn like_operators() {
        let row = car(1);
        assert!(cond(Column::Brand, FilterOp::StartsWith("tes".into())).matches(&row));
        assert!(cond(Column::Brand, FilterOp::EndsWith("A ".into())).matches(&row));
        assert!(!cond(Column::Brand, FilterOp::EndsWith("la".into())).matches(&row));
        assert!(cond(Column::PlugType, FilterOp::Contains("ccs".into())).matches(&row));
        assert!(!cond(Column::PlugType, FilterOp::Contains("%".into())).matches(&row));
    }

    #[test]
    fn like_on_numeric_columns_uses_text_form() {
        let row = car(1);
        assert!(cond(Column::PriceEuro, FilterOp::StartsWith("554".into())).matches(&row));
        assert!(cond(Column::AccelSec, FilterOp::Contains(".6".into())).matches(&row));

        let mut row = car(1);
        row.accel_sec = Some(5.0);
        assert!(cond(Column::AccelSec, FilterOp::EndsWith(".0".into())).matches(&row));
    }

    #[test]
    fn equals_text_is_exact() {
        let row = car(1);
        assert!(cond(Column::Segment, FilterOp::Equals("D".into())).matches(&row));
        assert!(!cond(Column::Segment, FilterOp::Equals("d".into())).matches(&row));
        assert!(!cond(Column::Brand, FilterOp::Equals("Tesla".into())).matches(&row));
    }

    #[test]
    fn equals_numeric_compares_numbers() {
        let row = car(7);
        assert!(cond(Column::Seats, FilterOp::Equals("5".into())).matches(&row));
        assert!(cond(Column::Seats, FilterOp::Equals("5.0".into())).matches(&row));
        assert!(!cond(Column::Seats, FilterOp::Equals("five".into())).matches(&row));
        assert!(cond(Column::Id, FilterOp::Equals("7".into())).matches(&row));
        assert!(cond(Column::AccelSec, FilterOp::Equals("4.6".into())).matches(&row));
    }

    #[test]
    fn integer_columns_compare_exactly() {
        let mut row = car(1);
        row.price_euro = Some(9_007_199_254_740_993);
        let big = "9007199254740992";
        assert!(!cond(Column::PriceEuro, FilterOp::Equals(big.into())).matches(&row));
        let above = FilterOp::Compare(CompareOp::Gt, 9_007_199_254_740_992.0);
        assert!(cond(Column::PriceEuro, above).matches(&row));
        assert!(!cond(Column::Seats, FilterOp::Equals("5.5".into())).matches(&row));
    }

    #[test]
    fn like_on_reals_uses_sqlite_rendering() {
        let mut row = car(1);
        row.accel_sec = Some(1e-7);
        assert!(cond(Column::AccelSec, FilterOp::EndsWith("e-07".into())).matches(&row));
        row.accel_sec = Some(0.1 + 0.2);
        assert!(cond(Column::AccelSec, FilterOp::EndsWith("0.3".into())).matches(&row));
        assert!(!cond(Column::AccelSec, FilterOp::Contains("0004".into())).matches(&row));
    }

    #[test]
    fn empty_checks() {
        let mut row = car(1);
        row.rapid_charge = Some(String::new());
        row.fast_charge_kmh = None;
        assert!(cond(Column::RapidCharge, FilterOp::IsEmpty).matches(&row));
        assert!(cond(Column::FastChargeKmh, FilterOp::IsEmpty).matches(&row));
        assert!(!cond(Column::Segment, FilterOp::IsEmpty).matches(&row));
        assert!(cond(Column::Segment, FilterOp::IsNotEmpty).matches(&row));
        assert!(!cond(Column::RapidCharge, FilterOp::IsNotEmpty).matches(&row));
    }

    #[test]
    fn null_never_matches_comparisons() {
        let mut row = car(1);
        row.fast_charge_kmh = None;
        row.date = None;
        for op in [CompareOp::Gt, CompareOp::Lt, CompareOp::Gte, CompareOp::Lte] {
            assert!(!cond(Column::FastChargeKmh, FilterOp::Compare(op, 0.0)).matches(&row));
            assert!(!cond(Column::Date, FilterOp::Compare(op, 0.0)).matches(&row));
        }
        assert!(!cond(Column::FastChargeKmh, FilterOp::Contains("".into())).matches(&row));
    }

    #[test]
    fn comparisons_on_text_use_leading_number() {
        let row = car(1);
        assert!(cond(Column::Date, FilterOp::Compare(CompareOp::Gte, 8.0)).matches(&row));
        assert!(!cond(Column::Date, FilterOp::Compare(CompareOp::Gt, 8.0)).matches(&row));
        assert!(cond(Column::Brand, FilterOp::Compare(CompareOp::Lte, 0.0)).matches(&row));

        let mut row = car(1);
        row.date = Some("\u{a0}5".to_string());
        assert!(!cond(Column::Date, FilterOp::Compare(CompareOp::Gt, 4.0)).matches(&row));
        row.date = Some("1e400".to_string());
        assert!(cond(Column::Date, FilterOp::Compare(CompareOp::Gt, 4.0)).matches(&row));
    }

    #[test]
    fn conditions_are_conjunctive() {
        let row = car(1);
        let filters = vec![
            FilterSpec::new("price_euro", "lessThan", Some("60000")),
            FilterSpec::new("seats", "greaterThanOrEqual", Some("5")),
        ];
        assert!(build_predicate(None, &filters).unwrap().matches(&row));

        let filters = vec![
            FilterSpec::new("price_euro", "lessThan", Some("60000")),
            FilterSpec::new("seats", "greaterThan", Some("5")),
        ];
        assert!(!build_predicate(None, &filters).unwrap().matches(&row));
    }
}
