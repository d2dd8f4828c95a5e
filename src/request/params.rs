//! Wire parameter encoding.
//!
//! Plisio takes every argument as a flat `name=value` pair. [`Params`] holds
//! typed values in insertion order; [`Params::encode`] renders them into the
//! strings that go on the query string (or form body).

use crate::shared::fmt::decimal;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Encoded `name → value` map, ready for the transport.
pub type EncodedParams = BTreeMap<String, String>;

/// A typed request parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Omitted from the encoded output.
    Absent,
    Text(String),
    Integer(i64),
    /// `true` encodes as `"1"`, `false` is omitted.
    Flag(bool),
    /// Single amount: eight fractional digits, trailing zeros stripped.
    Amount(Decimal),
    /// Amount list: eight fractional digits each, comma-joined, unstripped.
    Amounts(Vec<Decimal>),
    /// Raw values, comma-joined.
    Items(Vec<String>),
    /// Enumeration wire identifier.
    Tag(&'static str),
}

impl ParamValue {
    /// Build an [`ParamValue::Items`] from anything displayable, e.g. currency codes.
    pub fn items<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        ParamValue::Items(values.into_iter().map(|v| v.to_string()).collect())
    }

    /// Wire rendering, or `None` if the key must be left out.
    pub fn encode(&self) -> Option<String> {
        match self {
            ParamValue::Absent | ParamValue::Flag(false) => None,
            ParamValue::Flag(true) => Some("1".to_string()),
            ParamValue::Text(s) => Some(s.clone()),
            ParamValue::Integer(i) => Some(i.to_string()),
            ParamValue::Amount(d) => Some(decimal::stripped(d)),
            ParamValue::Amounts(v) => Some(decimal::fixed_list(v)),
            ParamValue::Items(v) => Some(v.join(",")),
            ParamValue::Tag(t) => Some((*t).to_string()),
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Text(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Integer(i64::from(value))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Flag(value)
    }
}

impl From<Decimal> for ParamValue {
    fn from(value: Decimal) -> Self {
        ParamValue::Amount(value)
    }
}

impl From<Vec<Decimal>> for ParamValue {
    fn from(value: Vec<Decimal>) -> Self {
        ParamValue::Amounts(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::Items(value)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Absent, Into::into)
    }
}

/// Ordered set of typed parameters for one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Params::insert`].
    pub fn with(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set `name`, replacing any earlier value in place.
    pub fn insert(&mut self, name: &str, value: impl Into<ParamValue>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render every present value. Absent values and `false` flags are dropped.
    pub fn encode(&self) -> EncodedParams {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.encode().map(|s| (k.clone(), s)))
            .collect()
    }
}
