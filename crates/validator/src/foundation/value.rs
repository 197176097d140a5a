//! Candidate attribute values and the lookup trait the composer reads them
//! through.
//!
//! [`AttributeValue`] mirrors the JSON data model with one difference that
//! matters for presence checks: numbers are `f64`, so a candidate can carry
//! `NaN`. A missing attribute is modelled as `None` at the lookup site, not
//! as a variant.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

// ============================================================================
// ATTRIBUTE VALUE
// ============================================================================

/// A proposed value for one attribute of a host record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Explicit null.
    Null,
    /// Boolean.
    Bool(bool),
    /// Any number, including `NaN` and infinities.
    Number(f64),
    /// UTF-8 text.
    String(String),
    /// Ordered sequence.
    Array(Vec<AttributeValue>),
    /// Keyed container, insertion ordered.
    Object(IndexMap<String, AttributeValue>),
}

impl AttributeValue {
    /// Short name of the variant, used in error params and logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Returns the text if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number if this is a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// True only for a number that is `NaN`.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        matches!(self, Self::Number(n) if n.is_nan())
    }

    /// True for an array or object with no entries.
    #[must_use]
    pub fn is_empty_container(&self) -> bool {
        match self {
            Self::Array(items) => items.is_empty(),
            Self::Object(entries) => entries.is_empty(),
            _ => false,
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<serde_json::Value> for AttributeValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(entries) => Self::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<AttributeValue>> From<Vec<T>> for AttributeValue {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

// ============================================================================
// CANDIDATE ATTRIBUTE SET
// ============================================================================

/// Read-only lookup over the candidate attributes of one validation pass.
///
/// `None` means the attribute is absent from the candidate set. The composer
/// still runs that attribute's validators, passing `None` as the value.
pub trait AttributeSource {
    /// Returns the candidate value for `name`.
    fn attribute(&self, name: &str) -> Option<&AttributeValue>;
}

impl<S: BuildHasher> AttributeSource for HashMap<String, AttributeValue, S> {
    fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.get(name)
    }
}

impl AttributeSource for BTreeMap<String, AttributeValue> {
    fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.get(name)
    }
}

impl<S: BuildHasher> AttributeSource for IndexMap<String, AttributeValue, S> {
    fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.get(name)
    }
}

impl<T: AttributeSource + ?Sized> AttributeSource for &T {
    fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        (**self).attribute(name)
    }
}

/// Builds an [`IndexMap`] candidate set from a JSON object.
///
/// Returns `None` when `value` is not an object.
#[must_use]
pub fn attributes_from_json(value: serde_json::Value) -> Option<IndexMap<String, AttributeValue>> {
    match AttributeValue::from(value) {
        AttributeValue::Object(entries) => Some(entries),
        _ => None,
    }
}

// ============================================================================
// TESTS
// ============================================================================
