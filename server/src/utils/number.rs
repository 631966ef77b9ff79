//! Lenient numeric parsing
//!
//! Prefix-based number parsing used when coercing free text into numbers:
//! numeric filter comparisons against text columns and CSV import.
//! The rules follow SQLite's text-to-number conversion so the in-memory
//! backend and the SQL backend agree on every row.

use std::cmp::Ordering;

/// Length of the longest real-number literal at the start of `s`.
///
/// Accepts an optional sign, digits with an optional fractional part, and an
/// optional exponent (only consumed when followed by digits). Returns 0 when
/// no mantissa digit is present.
fn real_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        if digits > 0 {
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

/// Strip the whitespace SQLite skips before a number.
///
/// Only the ASCII set (space, `\t`, `\n`, `\v`, `\f`, `\r`) counts;
/// Unicode spaces such as U+00A0 end the numeric prefix.
fn trim_sqlite_space(s: &str) -> &str {
    s.trim_start_matches([' ', '\t', '\n', '\x0b', '\x0c', '\r'])
}

/// Leading real number of `s`, overflowing to an infinity like SQLite does.
fn leading_real_prefix(s: &str) -> Option<f64> {
    let s = trim_sqlite_space(s);
    let len = real_prefix_len(s);
    if len == 0 {
        return None;
    }
    s[..len].parse::<f64>().ok()
}

/// Parse the leading finite real number of `s`, ignoring leading whitespace.
///
/// `"4.6 s"` → `Some(4.6)`, `"abc"` → `None`, `"1e400"` → `None`.
pub fn leading_float(s: &str) -> Option<f64> {
    leading_real_prefix(s).filter(|v| v.is_finite())
}

/// Text-to-real conversion with SQLite `CAST(x AS REAL)` semantics.
///
/// Text without a numeric prefix converts to `0.0`; out-of-range literals
/// become infinities.
pub fn leading_real(s: &str) -> f64 {
    leading_real_prefix(s).unwrap_or(0.0)
}

/// Parse the leading integer of `s`, ignoring leading whitespace.
///
/// Fractional parts are truncated (`"4.9"` → `Some(4)`).
pub fn leading_int(s: &str) -> Option<i64> {
    let s = trim_sqlite_space(s);
    let bytes = s.as_bytes();
    let mut i = 0;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == digits_start {
        return None;
    }
    s[..i].parse::<i64>().ok()
}

/// Exact ordering of an INTEGER against a REAL, as SQLite compares them.
///
/// No rounding through `f64`: `9007199254740993` is greater than
/// `9007199254740992.0`.
pub fn cmp_int_real(lhs: i64, rhs: f64) -> Ordering {
    // 2^63, the first value above i64::MAX
    const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if rhs.is_nan() {
        return Ordering::Greater;
    }
    if rhs >= I64_LIMIT {
        return Ordering::Less;
    }
    if rhs < -I64_LIMIT {
        return Ordering::Greater;
    }

    let whole = rhs.trunc();
    match lhs.cmp(&(whole as i64)) {
        Ordering::Equal if rhs > whole => Ordering::Less,
        Ordering::Equal if rhs < whole => Ordering::Greater,
        ord => ord,
    }
}

/// Strictly parse a caller-supplied numeric literal.
///
/// Surrounding whitespace is allowed; anything else (including `NaN` and
/// infinities) is rejected.
pub fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Render a REAL value the way SQLite converts it to text (`%!.15g`).
///
/// Fifteen significant digits with trailing zeros dropped but at least one
/// fractional digit kept. Decimal exponents below -4 or above 14 switch to
/// exponent form with a signed, two-digit minimum exponent:
/// `5.0` → `"5.0"`, `1e16` → `"1.0e+16"`, `1e-7` → `"1.0e-07"`.
pub fn render_real(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Inf" } else { "-Inf" }.to_string();
    }
    if value == 0.0 {
        return "0.0".to_string();
    }

    let sci = format!("{:.14e}", value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if (-4..=14).contains(&exp) {
        let decimals = (14 - exp) as usize;
        trim_fraction(&format!("{:.*}", decimals, value))
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    }
}

/// Drop trailing fractional zeros, keeping at least one digit after the point
fn trim_fraction(s: &str) -> String {
    match s.split_once('.') {
        Some((whole, frac)) => {
            let frac = frac.trim_end_matches('0');
            format!("{}.{}", whole, if frac.is_empty() { "0" } else { frac })
        }
        None => format!("{}.0", s),
    }
}
