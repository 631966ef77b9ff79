//! SQL rendering for predicates
//!
//! Column names come from [`Column::as_str`] only; every caller-supplied
//! value is bound as a parameter.

use super::columns::Column;
use super::types::{Condition, FilterOp, Predicate, SqlParams};
use crate::utils::number::parse_finite;
use crate::utils::sql::{and_clauses, escape_like_pattern};

impl Predicate {
    /// Render as a WHERE clause body, appending bound values to `params`
    ///
    /// Returns `1=1` for a match-all predicate.
    pub fn to_sql(&self, params: &mut SqlParams) -> String {
        let mut clauses = Vec::with_capacity(self.conditions.len() + 1);

        if let Some(search) = &self.search {
            clauses.push(search_clause(search, params));
        }
        for condition in &self.conditions {
            clauses.push(condition.to_sql(params));
        }

        and_clauses(&clauses)
    }
}

impl Condition {
    pub fn to_sql(&self, params: &mut SqlParams) -> String {
        let col = self.column.as_str();
        let numeric = self.column.kind().is_numeric();

        match &self.op {
            FilterOp::Contains(v) => {
                params.push_text(format!("%{}%", escape_like_pattern(v)));
                like(col)
            }
            FilterOp::StartsWith(v) => {
                params.push_text(format!("{}%", escape_like_pattern(v)));
                like(col)
            }
            FilterOp::EndsWith(v) => {
                params.push_text(format!("%{}", escape_like_pattern(v)));
                like(col)
            }
            FilterOp::Equals(v) => {
                // Unparseable text never equals a numeric column
                match parse_finite(v).filter(|_| numeric) {
                    Some(n) => params.push_real(n),
                    None => params.push_text(v.as_str()),
                }
                format!("{} = ?", col)
            }
            FilterOp::IsEmpty if numeric => format!("{} IS NULL", col),
            FilterOp::IsEmpty => format!("({col} IS NULL OR {col} = '')"),
            FilterOp::IsNotEmpty if numeric => format!("{} IS NOT NULL", col),
            FilterOp::IsNotEmpty => format!("({col} IS NOT NULL AND {col} <> '')"),
            FilterOp::Compare(op, n) => {
                params.push_real(*n);
                if numeric {
                    format!("{} {} ?", col, op.as_sql())
                } else {
                    format!("CAST({} AS REAL) {} ?", col, op.as_sql())
                }
            }
        }
    }
}

fn like(col: &str) -> String {
    format!("{} LIKE ? ESCAPE '\\'", col)
}

/// OR-group of substring matches over the searchable columns
fn search_clause(term: &str, params: &mut SqlParams) -> String {
    let pattern = format!("%{}%", escape_like_pattern(term));
    let parts: Vec<String> = Column::SEARCHABLE
        .iter()
        .map(|c| {
            params.push_text(pattern.as_str());
            like(c.as_str())
        })
        .collect();
    format!("({})", parts.join(" OR "))
}
