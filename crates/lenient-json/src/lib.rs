//! lenient-json - a lenient, dynamically-typed JSON value tree.
//!
//! Models a decoded JSON document as a single recursive sum type,
//! [`JsonValue`], built from the untyped tree an upstream decoder produces
//! (this crate never touches JSON text itself). Construction is deliberately
//! lenient: array elements and object entries that cannot be converted are
//! dropped, unrecognized scalar shapes normalize to null, and only a missing
//! top-level input fails.
//!
//! On top of the sum type the crate provides strict typed accessors,
//! positional/keyed lookup, deep structural equality (order-insensitive for
//! object keys), and a deterministic diagnostic rendering.
//!
//! # Examples
//!
//! ```
//! use lenient_json::JsonValue;
//! use serde_json::json;
//!
//! let value = JsonValue::from(json!({"name": "Ada", "scores": [1, 2.5]}));
//!
//! assert_eq!(value.get("name").and_then(JsonValue::as_str), Some("Ada"));
//! assert_eq!(
//!     value.get("scores").and_then(|s| s.get(1)).and_then(JsonValue::as_f64),
//!     Some(2.5)
//! );
//! // Lookups never panic; a mismatch is just absence.
//! assert_eq!(value.get(0), None);
//! assert_eq!(value.get("missing"), None);
//! ```

pub mod dynamic;
pub mod equal;
pub mod index;
pub mod number;
pub mod render;
pub mod value;

// Re-exports for convenience
pub use dynamic::Dynamic;
pub use equal::deep_equal;
pub use index::ValueIndex;
pub use number::Number;
pub use render::as_string;
pub use value::JsonValue;
