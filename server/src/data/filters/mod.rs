//! Car query filter system
//!
//! Turns a free-text search term plus a list of column filters into a
//! [`Predicate`]. A predicate renders to a parameterized SQL WHERE clause
//! for the SQLite backend and evaluates directly against rows for the
//! in-memory backend; both give the same answer for every row.
//!
//! ## Usage
//!
//! ```
//! use evgrid_server::data::filters::{SqlParams, build_predicate, parse_filter_payload};
//!
//! let raw = r#"[{"column": "price_euro", "operator": "lessThan", "value": 40000}]"#;
//! let filters = parse_filter_payload(raw).unwrap();
//! let predicate = build_predicate(Some("tesla"), &filters).unwrap();
//! let mut params = SqlParams::default();
//! let sql = predicate.to_sql(&mut params);
//! assert!(sql.ends_with("AND price_euro < ?"));
//! assert_eq!(params.values.len(), 6);
//! ```

mod builder;
mod columns;
mod eval;
mod parser;
mod types;

pub use columns::{Column, ColumnKind};
pub use parser::{build_predicate, decode_filter_payload, parse_filter_payload};
pub use types::{
    CompareOp, Condition, FilterError, FilterOp, FilterSpec, Operator, Predicate, SqlParams,
    SqlValue,
};
