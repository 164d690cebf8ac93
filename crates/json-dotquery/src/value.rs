//! The decoded JSON tree shared between resolvers.

use std::sync::Arc;

use ahash::AHashMap;
use serde_json::Value;

/// A decoded JSON value.
///
/// This mirrors the JSON data model with one deliberate difference: numbers
/// keep their integer or floating decoded representation as distinct variants.
/// The typed getters refuse to coerce between the two, so `1` and `1.0` stay
/// distinguishable after decoding.
///
/// Children of arrays and objects are reference-counted. Traversal never
/// copies a subtree; resolvers for nested values share the nodes built once
/// at decode time.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Arc<JsonValue>>),
    Object(AHashMap<String, Arc<JsonValue>>),
}

impl JsonValue {
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer value, if this number decoded as an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The floating value, if this number decoded as floating-point.
    ///
    /// Integer-decoded numbers return `None` here; the two representations
    /// are distinct shapes.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Arc<JsonValue>]> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&AHashMap<String, Arc<JsonValue>>> {
        match self {
            JsonValue::Object(fields) => Some(fields),
            _ => None,
        }
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => JsonValue::Int(i),
                // u64 beyond i64::MAX and all floats; as_f64 cannot fail
                // for a number parsed without arbitrary precision.
                None => JsonValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => JsonValue::String(s),
            Value::Array(items) => {
                JsonValue::Array(items.into_iter().map(|v| Arc::new(v.into())).collect())
            }
            Value::Object(fields) => JsonValue::Object(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, Arc::new(v.into())))
                    .collect(),
            ),
        }
    }
}
