//! Open attribute mappings.
//!
//! Items, source items and lodgings carry an arbitrary set of extra named
//! fields on top of their fixed columns. Values are restricted to a closed
//! set of scalars so every mapping can be rendered without guessing.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered mapping of attribute name to display value.
///
/// Iteration order is insertion order, which is also the display order.
pub type Attributes = IndexMap<String, AttributeValue>;

/// A single open attribute value.
///
/// Deserialization tries the variants in order: JSON numbers become
/// `Number`, strings shaped like `YYYY-MM-DD` become `Date`, every other
/// string is `Text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Number kept with its exact source text (`19.50` stays `19.50`).
    /// Relies on serde_json's `arbitrary_precision`, which stores the digits
    /// instead of converting through `f64`.
    Number(serde_json::Number),
    Date(NaiveDate),
    Text(String),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Number(n) => write!(f, "{}", n),
            AttributeValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            AttributeValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Number(value.into())
    }
}

impl From<u64> for AttributeValue {
    fn from(value: u64) -> Self {
        AttributeValue::Number(value.into())
    }
}

impl From<f64> for AttributeValue {
    /// Non-finite floats have no JSON number form and fall back to text.
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(AttributeValue::Number)
            .unwrap_or_else(|| AttributeValue::Text(value.to_string()))
    }
}

impl From<NaiveDate> for AttributeValue {
    fn from(value: NaiveDate) -> Self {
        AttributeValue::Date(value)
    }
}
