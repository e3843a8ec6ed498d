//! Numeric coercion for upstream price fields
//!
//! Product and coupon records reach the storefront with price fields that are
//! sometimes JSON numbers and sometimes numeric strings. Everything is funnelled
//! through [`coerce_to_number`], which never fails: anything unreadable is 0.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// Coerce a JSON value into a decimal
///
/// Numbers and numeric strings are parsed; `null`, booleans, arrays, objects
/// and non-numeric strings yield zero.
pub fn coerce_to_number(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => parse_leading_decimal(&n.to_string()),
        Value::String(s) => parse_leading_decimal(s),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => Decimal::ZERO,
    }
}

/// Parse the longest decimal literal at the start of `input`
///
/// Leading whitespace is skipped and trailing garbage ignored, so `"12px"`
/// reads as 12. Returns zero when no digits lead the string. Literals beyond
/// the `Decimal` range saturate to `Decimal::MAX` or `Decimal::MIN`, and
/// magnitudes too small to represent read as zero.
pub fn parse_leading_decimal(input: &str) -> Decimal {
    let Some(literal) = leading_literal(input.trim_start()) else {
        return Decimal::ZERO;
    };

    let parsed = if literal.contains('e') {
        Decimal::from_scientific(&literal)
    } else {
        Decimal::from_str(&literal)
    };

    parsed.unwrap_or_else(|_| saturate_literal(&literal))
}

/// Resolve a well-formed literal that `Decimal` refused to parse
fn saturate_literal(literal: &str) -> Decimal {
    // f64 reads any well-formed literal, going to infinity or zero at the extremes
    let Ok(value) = literal.parse::<f64>() else {
        return Decimal::ZERO;
    };

    match Decimal::from_f64(value) {
        Some(decimal) => decimal,
        None if value.abs() < 1.0 => Decimal::ZERO,
        None if value.is_sign_negative() => Decimal::MIN,
        None => Decimal::MAX,
    }
}

/// Extract and normalize a literal of the form `[+-]digits[.digits][e[+-]digits]`
fn leading_literal(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let mut pos = 0;
    let mut literal = String::new();

    if let Some(&sign) = bytes.first() {
        if sign == b'-' || sign == b'+' {
            if sign == b'-' {
                literal.push('-');
            }
            pos += 1;
        }
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &s[int_start..pos];

    let mut frac_digits = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &s[frac_start..end];
        pos = end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    literal.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    if !frac_digits.is_empty() {
        literal.push('.');
        literal.push_str(frac_digits);
    }

    // Exponent only counts when at least one digit follows it
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut exp_pos = pos + 1;
        let mut exp_sign = "";
        if exp_pos < bytes.len() && (bytes[exp_pos] == b'-' || bytes[exp_pos] == b'+') {
            if bytes[exp_pos] == b'-' {
                exp_sign = "-";
            }
            exp_pos += 1;
        }
        let exp_start = exp_pos;
        while exp_pos < bytes.len() && bytes[exp_pos].is_ascii_digit() {
            exp_pos += 1;
        }
        if exp_pos > exp_start {
            literal.push('e');
            literal.push_str(exp_sign);
            literal.push_str(&s[exp_start..exp_pos]);
        }
    }

    Some(literal)
}

/// Serde helpers for lenient price fields
///
/// Use with `#[serde(deserialize_with = "...")]` on fields that may arrive as
/// numbers or strings.
pub mod lenient {
    use super::{coerce_to_number, Decimal, Value};
    use serde::{Deserialize, Deserializer};

    /// Deserialize any JSON value into a decimal, defaulting to zero
    pub fn decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(coerce_to_number(&value))
    }

    /// Deserialize a JSON value into `Some(decimal)`, keeping `null` as `None`
    ///
    /// Combine with `#[serde(default)]` so that missing fields are `None` too.
    pub fn option_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Null => None,
            other => Some(coerce_to_number(&other)),
        })
    }
}
