//! Lenient conversion of untyped request fields.
//!
//! Admin forms post whatever the browser had in its inputs: numbers may come
//! as strings, flags may be missing, strings may carry padding. These helpers
//! turn a JSON field (possibly absent) into the scalar the handlers expect,
//! following the loose rules browsers apply to form values.

use crate::Json;

/// Text of a field: absent and `null` become `""`, scalars are rendered,
/// and the result is trimmed.
pub fn coerce_string(value: Option<&Json>) -> String {
    match value {
        None | Some(Json::Null) => String::new(),
        Some(Json::String(s)) => s.trim().to_string(),
        Some(Json::Bool(b)) => b.to_string(),
        Some(Json::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Numeric value of a field. Anything that can't be read as a number is NaN,
/// so callers only need an `is_finite` check.
pub fn coerce_number(value: Option<&Json>) -> f64 {
    match value {
        None => f64::NAN,
        Some(Json::Null) => 0.0,
        Some(Json::Bool(b)) => f64::from(u8::from(*b)),
        Some(Json::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Json::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                parse_decimal(s)
            }
        },
        Some(Json::Array(_) | Json::Object(_)) => f64::NAN,
    }
}

/// Whether a field counts as set.
pub fn coerce_flag(value: Option<&Json>) -> bool {
    match value {
        None | Some(Json::Null) => false,
        Some(Json::Bool(b)) => *b,
        Some(Json::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Json::String(s)) => !s.is_empty(),
        Some(Json::Array(_) | Json::Object(_)) => true,
    }
}

/// Drop the fractional part. `None` when the result doesn't fit in `i64`,
/// which includes NaN and the infinities.
pub fn truncate(value: f64) -> Option<i64> {
    // 2^63; `i64::MAX as f64` rounds up to it, so it can't be the bound.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    let value = value.trunc();
    if value >= -LIMIT && value < LIMIT {
        Some(value as i64)
    } else {
        None
    }
}

fn parse_decimal(s: &str) -> f64 {
    // `f64::from_str` also takes "inf" and "nan"; only plain decimals and
    // `Infinity` count here.
    match s.trim_start_matches(['+', '-']) {
        "Infinity" if s.starts_with('-') => f64::NEG_INFINITY,
        "Infinity" => f64::INFINITY,
        rest if is_decimal(rest) => s.parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

fn is_decimal(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
        && s
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
}

#[cfg(test)]
mod tests {
    use {super::*, crate::json, test_case::test_case};

    #[test_case(None => ""; "absent")]
    #[test_case(Some(json!(null)) => ""; "null")]
    #[test_case(Some(json!("  ufoo ")) => "ufoo"; "trimmed")]
    #[test_case(Some(json!(42)) => "42"; "number")]
    #[test_case(Some(json!(true)) => "true"; "boolean")]
    fn strings(value: Option<Json>) -> String {
        coerce_string(value.as_ref())
    }

    #[test_case(Some(json!(4999.9)) => 4999.9; "number")]
    #[test_case(Some(json!(" 250 ")) => 250.0; "numeric string")]
    #[test_case(Some(json!("")) => 0.0; "empty string")]
    #[test_case(Some(json!(null)) => 0.0; "null")]
    #[test_case(Some(json!(true)) => 1.0; "true")]
    #[test_case(Some(json!("1e3")) => 1000.0; "exponent")]
    fn finite_numbers(value: Option<Json>) -> f64 {
        coerce_number(value.as_ref())
    }

    #[test_case(None; "absent")]
    #[test_case(Some(json!("abc")); "text")]
    #[test_case(Some(json!("nan")); "nan spelled out")]
    #[test_case(Some(json!("inf")); "inf spelled out")]
    #[test_case(Some(json!([1])); "array")]
    #[test_case(Some(json!({"v": 1})); "object")]
    fn not_a_number(value: Option<Json>) {
        assert!(coerce_number(value.as_ref()).is_nan());
    }

    #[test]
    fn infinity_is_not_finite() {
        assert!(!coerce_number(Some(&json!("Infinity"))).is_finite());
        assert!(!coerce_number(Some(&json!("-Infinity"))).is_finite());
    }

    #[test_case(None => false; "absent")]
    #[test_case(Some(json!(false)) => false; "false")]
    #[test_case(Some(json!(0)) => false; "zero")]
    #[test_case(Some(json!("")) => false; "empty string")]
    #[test_case(Some(json!(true)) => true; "true")]
    #[test_case(Some(json!("no")) => true; "non-empty string")]
    #[test_case(Some(json!(1)) => true; "one")]
    fn flags(value: Option<Json>) -> bool {
        coerce_flag(value.as_ref())
    }

    #[test_case(4999.9 => Some(4999); "fraction")]
    #[test_case(-3.7 => Some(-3); "negative fraction")]
    #[test_case(9_007_199_254_740_993.0 => Some(9_007_199_254_740_992); "beyond exact floats")]
    #[test_case(-9_223_372_036_854_775_808.0 => Some(i64::MIN); "lowest")]
    #[test_case(9_223_372_036_854_775_808.0 => None; "two to the 63rd")]
    #[test_case(1e20 => None; "too large")]
    #[test_case(-1e30 => None; "too small")]
    #[test_case(f64::INFINITY => None; "infinite")]
    #[test_case(f64::NAN => None; "nan")]
    fn truncation(value: f64) -> Option<i64> {
        truncate(value)
    }
}
