//! SQL utility functions

/// Escape SQL LIKE metacharacters (%, _, \) in user input
///
/// Use this when building LIKE patterns from user input so that filter
/// values are matched literally. Pair with `ESCAPE '\'` in the clause.
///
/// # Example
///
/// ```
/// use evgrid_server::utils::sql::escape_like_pattern;
///
/// let user_input = "100% e_tron";
/// let pattern = format!("%{}%", escape_like_pattern(user_input));
/// assert_eq!(pattern, "%100\\% e\\_tron%");
/// ```
pub fn escape_like_pattern(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Join WHERE clause fragments with AND, or `1=1` when there are none
pub fn and_clauses(clauses: &[String]) -> String {
    if clauses.is_empty() {
        "1=1".to_string()
    } else {
        clauses.join(" AND ")
    }
}
