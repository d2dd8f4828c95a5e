//! Custom serde helpers for Plisio wire formats.
//!
//! The API is loose about scalar types: amounts arrive as strings
//! (`"1.50000000"`) or numbers, counters as numbers or numeric strings, and
//! absent values as missing keys, `null` or sometimes `""`. Every helper here
//! decodes into an `Option` and maps absence to `None`, never to a default.
//!
//! Use with `#[serde(default, deserialize_with = "...")]` so that a missing key
//! also yields `None`.

use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .ok()
        .or_else(|| Decimal::from_scientific(raw).ok())
}

/// Coerce a JSON value to a decimal. `null` and `""` are absent.
pub fn coerce_decimal(value: &Value) -> Result<Option<Decimal>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => parse_decimal(s.trim())
            .map(Some)
            .ok_or_else(|| format!("expected decimal, found `{s}`")),
        Value::Number(n) => parse_decimal(&n.to_string())
            .map(Some)
            .ok_or_else(|| format!("expected decimal, found {n}")),
        other => Err(format!("expected decimal, found {}", type_name(other))),
    }
}

/// Coerce a JSON value to an integer. Integral floats are truncated.
pub fn coerce_int(value: &Value) -> Result<Option<i64>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| format!("expected integer, found `{s}`")),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(Some(i));
            }
            match n.as_f64() {
                Some(f) if f.is_finite() && f.abs() < i64::MAX as f64 => Ok(Some(f.trunc() as i64)),
                _ => Err(format!("expected integer, found {n}")),
            }
        }
        other => Err(format!("expected integer, found {}", type_name(other))),
    }
}

/// Coerce a JSON value to text. Numbers are rendered as written.
pub fn coerce_string(value: &Value) -> Result<Option<String>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(format!("expected string, found {}", type_name(other))),
    }
}

/// Coerce a JSON value to a flag. Accepts booleans and `0`/`1`.
pub fn coerce_flag(value: &Value) -> Result<Option<bool>, String> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(*b)),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Ok(Some(false)),
            Some(1) => Ok(Some(true)),
            _ => Err(format!("expected flag, found {n}")),
        },
        Value::String(s) => match s.as_str() {
            "" => Ok(None),
            "0" | "false" => Ok(Some(false)),
            "1" | "true" => Ok(Some(true)),
            _ => Err(format!("expected flag, found `{s}`")),
        },
        other => Err(format!("expected flag, found {}", type_name(other))),
    }
}

/// Coerce a JSON value to a list of strings. A lone string becomes a
/// one-element list.
pub fn coerce_string_list(value: &Value) -> Result<Option<Vec<String>>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(vec![s.clone()])),
        Value::Array(items) => items
            .iter()
            .map(|item| match coerce_string(item)? {
                Some(s) => Ok(s),
                None => Err("expected string list, found null element".to_string()),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        other => Err(format!("expected string list, found {}", type_name(other))),
    }
}

/// Coerce a JSON value to a code-table identifier. `""` is absent; the lookup
/// itself happens during conversion.
pub fn coerce_code(value: &Value) -> Result<Option<String>, String> {
    match value {
        Value::String(s) if s.is_empty() => Ok(None),
        other => coerce_string(other),
    }
}

macro_rules! lenient {
    ($module:ident, $coerce:ident, $ty:ty) => {
        #[doc = concat!("Serde adapter for [`", stringify!($coerce), "`].")]
        pub mod $module {
            use super::*;

            pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<$ty>, D::Error>
            where
                D: Deserializer<'de>,
            {
                let value = Option::<Value>::deserialize(deserializer)?.unwrap_or(Value::Null);
                super::$coerce(&value).map_err(D::Error::custom)
            }
        }
    };
}

lenient!(opt_decimal, coerce_decimal, Decimal);
lenient!(opt_int, coerce_int, i64);
lenient!(opt_string, coerce_string, String);
lenient!(opt_flag, coerce_flag, bool);
lenient!(opt_string_list, coerce_string_list, Vec<String>);
lenient!(opt_code, coerce_code, String);
