//! The decoder-facing input boundary.
//!
//! An upstream JSON decoder hands over an untyped tree; [`Dynamic`] is the
//! closed description of the shapes that tree can take. Construction of a
//! [`JsonValue`](crate::JsonValue) pattern-matches on it exhaustively.

/// A dynamically-typed value as produced by an external JSON decoder.
///
/// `Undefined` is the dynamic equivalent of "no value" (a missing or omitted
/// field) and is the only shape that fails conversion. `Other` stands for any
/// shape this crate does not recognize; conversion normalizes it to null.
///
/// Object keys are themselves dynamic, since a permissive decoder may produce
/// non-text keys. Conversion drops such entries.
#[derive(Debug, Clone, PartialEq)]
pub enum Dynamic {
    Array(Vec<Dynamic>),
    Object(Vec<(Dynamic, Dynamic)>),
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Null,
    Undefined,
    Other,
}

impl Dynamic {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Dynamic::Undefined)
    }
}

impl From<serde_json::Value> for Dynamic {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Dynamic::Null,
            serde_json::Value::Bool(b) => Dynamic::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Dynamic::Int(i)
                } else if let Some(x) = n.as_f64() {
                    // Fractional numbers and u64 beyond the i64 range both
                    // land here.
                    Dynamic::Float(x)
                } else {
                    Dynamic::Other
                }
            }
            serde_json::Value::String(s) => Dynamic::Text(s),
            serde_json::Value::Array(items) => {
                Dynamic::Array(items.into_iter().map(Dynamic::from).collect())
            }
            serde_json::Value::Object(map) => Dynamic::Object(
                map.into_iter()
                    .map(|(key, val)| (Dynamic::Text(key), Dynamic::from(val)))
                    .collect(),
            ),
        }
    }
}

impl From<i64> for Dynamic {
    fn from(n: i64) -> Self {
        Dynamic::Int(n)
    }
}

impl From<f64> for Dynamic {
    fn from(x: f64) -> Self {
        Dynamic::Float(x)
    }
}

impl From<bool> for Dynamic {
    fn from(b: bool) -> Self {
        Dynamic::Bool(b)
    }
}

impl From<&str> for Dynamic {
    fn from(s: &str) -> Self {
        Dynamic::Text(s.to_string())
    }
}

impl From<String> for Dynamic {
    fn from(s: String) -> Self {
        Dynamic::Text(s)
    }
}

impl<T: Into<Dynamic>> From<Vec<T>> for Dynamic {
    fn from(items: Vec<T>) -> Self {
        Dynamic::Array(items.into_iter().map(Into::into).collect())
    }
}
