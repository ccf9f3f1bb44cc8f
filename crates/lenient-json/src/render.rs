//! Diagnostic rendering.
//!
//! The `Display` form is for debugging and logging. It is deterministic
//! (object keys render in sorted byte order) but not guaranteed to be valid
//! JSON text, and it does not round-trip.

use std::fmt;

use crate::value::JsonValue;

/// Serialize text as a quoted JSON string value.
///
/// # Examples
///
/// ```
/// use lenient_json::as_string;
///
/// assert_eq!(as_string("hello"), "\"hello\"");
/// assert_eq!(as_string("say \"hi\""), "\"say \\\"hi\\\"\"");
/// ```
pub fn as_string(s: &str) -> String {
    // String serialization cannot fail - serde_json always successfully serializes strings
    serde_json::to_string(s).expect("string serialization is infallible")
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonValue::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            JsonValue::Object(map) => {
                let mut entries: Vec<(&String, &JsonValue)> = map.iter().collect();
                entries.sort_by(|a, b| a.0.cmp(b.0));
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", as_string(key), value)?;
                }
                f.write_str("}")
            }
            JsonValue::Number(n) => write!(f, "{}", n),
            JsonValue::String(s) => f.write_str(&as_string(s)),
            JsonValue::Null => f.write_str("null"),
        }
    }
}
