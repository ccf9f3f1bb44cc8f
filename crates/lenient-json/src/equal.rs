//! Deep structural equality.

use crate::value::JsonValue;

/// Performs a deep equality check between two value trees.
///
/// Comparison is variant-aware and structural, never by identity:
///
/// - Arrays compare element by element, in order.
/// - Objects compare by walking both key sets in sorted byte order; key
///   insertion order never matters.
/// - Numbers compare numerically (`1`, `1.0` and `true` are equal payloads).
/// - Values of different variants are never equal.
///
/// # Examples
///
/// ```
/// use lenient_json::{deep_equal, JsonValue};
/// use serde_json::json;
///
/// let a = JsonValue::from(json!({"a": 1, "b": 2}));
/// let b = JsonValue::from(json!({"b": 2, "a": 1}));
/// let c = JsonValue::from(json!({"a": 1, "b": 3}));
///
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&a, &c));
/// ```
pub fn deep_equal(a: &JsonValue, b: &JsonValue) -> bool {
    match (a, b) {
        (JsonValue::Null, JsonValue::Null) => true,
        (JsonValue::Number(a), JsonValue::Number(b)) => a == b,
        (JsonValue::String(a), JsonValue::String(b)) => a == b,

        (JsonValue::Array(arr_a), JsonValue::Array(arr_b)) => {
            if arr_a.len() != arr_b.len() {
                return false;
            }
            arr_a.iter().zip(arr_b).all(|(x, y)| deep_equal(x, y))
        }

        (JsonValue::Object(obj_a), JsonValue::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            // The maps are unordered, so sort both key sets in byte order and
            // walk them pairwise. Equal maps produce identical sorted key
            // sequences.
            let mut keys_a: Vec<&String> = obj_a.keys().collect();
            let mut keys_b: Vec<&String> = obj_b.keys().collect();
            keys_a.sort();
            keys_b.sort();
            keys_a.iter().zip(&keys_b).all(|(key_a, key_b)| {
                key_a == key_b
                    && match (obj_a.get(*key_a), obj_b.get(*key_b)) {
                        (Some(val_a), Some(val_b)) => deep_equal(val_a, val_b),
                        _ => false,
                    }
            })
        }

        // Different variants are never equal.
        _ => false,
    }
}

impl PartialEq for JsonValue {
    fn eq(&self, other: &Self) -> bool {
        deep_equal(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn v(value: serde_json::Value) -> JsonValue {
        JsonValue::from(value)
    }

    // Scalar tests
    #[test]
    fn test_equal_numbers() {
        assert!(deep_equal(&v(json!(1)), &v(json!(1))));
    }

    #[test]
    fn test_not_equal_numbers() {
        assert!(!deep_equal(&v(json!(1)), &v(json!(2))));
    }

    #[test]
    fn test_int_and_float_payloads_compare_numerically() {
        assert!(deep_equal(&v(json!(1)), &v(json!(1.0))));
        assert!(!deep_equal(&v(json!(1)), &v(json!(1.5))));
    }

    #[test]
    fn test_bool_is_a_numeric_payload() {
        assert!(deep_equal(&v(json!(true)), &v(json!(1))));
        assert!(deep_equal(&v(json!(false)), &v(json!(0))));
        assert!(!deep_equal(&v(json!(true)), &v(json!(2))));
    }

    #[test]
    fn test_number_and_array_not_equal() {
        assert!(!deep_equal(&v(json!(1)), &v(json!([]))));
    }

    #[test]
    fn test_zero_and_null_not_equal() {
        assert!(!deep_equal(&v(json!(0)), &v(json!(null))));
    }

    #[test]
    fn test_number_and_numeric_string_not_equal() {
        assert!(!deep_equal(&v(json!(1)), &v(json!("1"))));
    }

    #[test]
    fn test_equal_strings() {
        assert!(deep_equal(&v(json!("a")), &v(json!("a"))));
    }

    #[test]
    fn test_not_equal_strings() {
        assert!(!deep_equal(&v(json!("a")), &v(json!("b"))));
    }

    #[test]
    fn test_empty_string_and_null_not_equal() {
        assert!(!deep_equal(&v(json!("")), &v(json!(null))));
    }

    #[test]
    fn test_null_equal_null() {
        assert!(deep_equal(&v(json!(null)), &v(json!(null))));
    }

    // Object tests
    #[test]
    fn test_empty_objects_equal() {
        assert!(deep_equal(&v(json!({})), &v(json!({}))));
    }

    #[test]
    fn test_equal_objects_different_key_order() {
        assert!(deep_equal(
            &v(json!({"a": 1, "b": "2"})),
            &v(json!({"b": "2", "a": 1}))
        ));
    }

    #[test]
    fn test_not_equal_objects_extra_property() {
        assert!(!deep_equal(
            &v(json!({"a": 1, "b": "2"})),
            &v(json!({"a": 1, "b": "2", "c": []}))
        ));
    }

    #[test]
    fn test_not_equal_objects_different_values() {
        assert!(!deep_equal(
            &v(json!({"a": 1, "b": "2", "c": 3})),
            &v(json!({"a": 1, "b": "2", "c": 4}))
        ));
    }

    #[test]
    fn test_not_equal_objects_different_properties() {
        assert!(!deep_equal(
            &v(json!({"a": 1, "b": "2", "c": 3})),
            &v(json!({"a": 1, "b": "2", "d": 3}))
        ));
    }

    #[test]
    fn test_equal_nested_objects() {
        assert!(deep_equal(
            &v(json!({"a": [{"b": "c"}]})),
            &v(json!({"a": [{"b": "c"}]}))
        ));
    }

    #[test]
    fn test_empty_object_and_array_not_equal() {
        assert!(!deep_equal(&v(json!({})), &v(json!([]))));
    }

    #[test]
    fn test_key_order_is_byte_order() {
        // "Z" (0x5A) sorts before "a" (0x61); equality must agree regardless
        // of insertion order.
        assert!(deep_equal(
            &v(json!({"Z": 1, "a": 2})),
            &v(json!({"a": 2, "Z": 1}))
        ));
        assert!(!deep_equal(
            &v(json!({"Z": 1, "a": 2})),
            &v(json!({"z": 1, "A": 2}))
        ));
    }

    // Array tests
    #[test]
    fn test_empty_arrays_equal() {
        assert!(deep_equal(&v(json!([])), &v(json!([]))));
    }

    #[test]
    fn test_equal_arrays() {
        assert!(deep_equal(&v(json!([1, 2, 3])), &v(json!([1, 2, 3]))));
    }

    #[test]
    fn test_array_element_order_is_significant() {
        assert!(!deep_equal(&v(json!([1, 2])), &v(json!([2, 1]))));
    }

    #[test]
    fn test_not_equal_arrays_different_length() {
        assert!(!deep_equal(&v(json!([1, 2, 3])), &v(json!([1, 2]))));
    }

    #[test]
    fn test_equal_arrays_of_objects() {
        assert!(deep_equal(
            &v(json!([{"a": "a"}, {"b": "b"}])),
            &v(json!([{"a": "a"}, {"b": "b"}]))
        ));
    }

    #[test]
    fn test_partial_eq_delegates_to_deep_equal() {
        assert_eq!(v(json!({"a": [1, 2]})), v(json!({"a": [1, 2]})));
        assert_ne!(v(json!({"a": [1, 2]})), v(json!({"a": [2, 1]})));
    }

    // Complex tests
    #[test]
    fn test_big_object() {
        let a = v(json!({
            "prop1": "value1",
            "prop2": "value2",
            "prop3": "value3",
            "prop4": {
                "subProp1": "sub value1",
                "subProp2": {
                    "subSubProp1": "sub sub value1",
                    "subSubProp2": [1, 2, {"prop2": 1, "prop": 2}, 4, 5]
                }
            },
            "prop5": 1000
        }));
        let b = v(json!({
            "prop5": 1000,
            "prop3": "value3",
            "prop1": "value1",
            "prop2": "value2",
            "prop4": {
                "subProp2": {
                    "subSubProp1": "sub sub value1",
                    "subSubProp2": [1, 2, {"prop2": 1, "prop": 2}, 4, 5]
                },
                "subProp1": "sub value1"
            }
        }));
        assert!(deep_equal(&a, &b));
    }
}
