//! The JSON value tree: construction from dynamic input and typed accessors.

use std::collections::HashMap;

use crate::dynamic::Dynamic;
use crate::index::ValueIndex;
use crate::number::Number;

/// A parsed JSON document fragment.
///
/// A closed, recursive sum type with five variants. The tree is a pure value:
/// it owns its children outright and is never mutated after construction.
///
/// Booleans live in the `Number` variant, as they do in the decoded input;
/// [`as_bool`](JsonValue::as_bool) coerces the numeric payload.
///
/// # Examples
///
/// ```
/// use lenient_json::JsonValue;
/// use serde_json::json;
///
/// let value = JsonValue::from(json!({"name": "Ada", "scores": [1, 2, 3]}));
/// assert_eq!(value.get("name").and_then(JsonValue::as_str), Some("Ada"));
///
/// let first = value.get("scores").and_then(|s| s.get(0));
/// assert_eq!(first.and_then(JsonValue::as_i64), Some(1));
/// ```
#[derive(Debug, Clone)]
pub enum JsonValue {
    Array(Vec<JsonValue>),
    Object(HashMap<String, JsonValue>),
    Number(Number),
    String(String),
    Null,
}

impl JsonValue {
    /// Construct a value tree from a decoded dynamic tree.
    ///
    /// Returns `None` only when the input is absent (`None` or
    /// [`Dynamic::Undefined`]). Everything else converts: unrecognized shapes
    /// normalize to [`JsonValue::Null`], and unconvertible array elements and
    /// object entries are silently dropped rather than failing the whole
    /// document.
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_json::{Dynamic, JsonValue};
    ///
    /// assert_eq!(JsonValue::new(None), None);
    /// assert_eq!(JsonValue::new(Some(Dynamic::Undefined)), None);
    ///
    /// let value = JsonValue::new(Some(Dynamic::Int(1)));
    /// assert_eq!(value.and_then(|v| v.as_i64()), Some(1));
    /// ```
    pub fn new(input: Option<Dynamic>) -> Option<JsonValue> {
        Self::convert(input?)
    }

    /// Recursive conversion; `None` only for `Undefined`.
    fn convert(input: Dynamic) -> Option<JsonValue> {
        match input {
            Dynamic::Array(items) => {
                // Filtering pass: a dropped element never short-circuits the
                // rest of the array.
                let items = items.into_iter().filter_map(Self::convert).collect();
                Some(JsonValue::Array(items))
            }
            Dynamic::Object(entries) => {
                let mut map = HashMap::new();
                for (key, value) in entries {
                    if let Dynamic::Text(key) = key {
                        if let Some(value) = Self::convert(value) {
                            map.insert(key, value);
                        }
                    }
                }
                Some(JsonValue::Object(map))
            }
            Dynamic::Int(n) => Some(JsonValue::Number(Number::Int(n))),
            Dynamic::Float(x) => Some(JsonValue::Number(Number::Float(x))),
            Dynamic::Bool(b) => Some(JsonValue::Number(Number::Bool(b))),
            Dynamic::Text(s) => Some(JsonValue::String(s)),
            Dynamic::Null | Dynamic::Other => Some(JsonValue::Null),
            Dynamic::Undefined => None,
        }
    }

    /// Unwrap the tree back into its dynamic form.
    ///
    /// Constructing from the result reproduces an equal tree.
    pub fn to_dynamic(&self) -> Dynamic {
        match self {
            JsonValue::Array(items) => {
                Dynamic::Array(items.iter().map(JsonValue::to_dynamic).collect())
            }
            JsonValue::Object(map) => Dynamic::Object(
                map.iter()
                    .map(|(key, val)| (Dynamic::Text(key.clone()), val.to_dynamic()))
                    .collect(),
            ),
            JsonValue::Number(Number::Int(n)) => Dynamic::Int(*n),
            JsonValue::Number(Number::Float(x)) => Dynamic::Float(*x),
            JsonValue::Number(Number::Bool(b)) => Dynamic::Bool(*b),
            JsonValue::String(s) => Dynamic::Text(s.clone()),
            JsonValue::Null => Dynamic::Null,
        }
    }

    /// Look up an element by position or key.
    ///
    /// `usize` indexes into the `Array` variant, string types into the
    /// `Object` variant. Any mismatch (wrong variant, index out of range,
    /// key absent) is `None`; never panics.
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_json::JsonValue;
    /// use serde_json::json;
    ///
    /// let value = JsonValue::from(json!([1, 2, 3]));
    /// assert_eq!(value.get(0).and_then(JsonValue::as_i64), Some(1));
    /// assert_eq!(value.get(5), None);
    /// assert_eq!(value.get("key"), None);
    /// ```
    pub fn get<I: ValueIndex>(&self, index: I) -> Option<&JsonValue> {
        index.index_into(self)
    }

    /// The integer form of the numeric payload, if this is a number.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonValue::Number(n) => Some(n.as_i64()),
            _ => None,
        }
    }

    /// The floating-point form of the numeric payload, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// The boolean coercion of the numeric payload, if this is a number.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Number(n) => Some(n.as_bool()),
            _ => None,
        }
    }

    /// The raw numeric payload, if this is a number.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The text payload, if this is a string. Never parses numbers from text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The ordered children, if this is an array.
    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The key/value mapping, if this is an object.
    pub fn as_object(&self) -> Option<&HashMap<String, JsonValue>> {
        match self {
            JsonValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }
}

impl From<serde_json::Value> for JsonValue {
    /// Total conversion from a decoded `serde_json` tree.
    ///
    /// Such a tree contains no undefined values and no non-text keys, so
    /// nothing is dropped.
    fn from(value: serde_json::Value) -> Self {
        JsonValue::convert(Dynamic::from(value)).unwrap_or(JsonValue::Null)
    }
}
