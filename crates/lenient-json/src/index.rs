//! Positional and keyed lookup into composite values.

use crate::value::JsonValue;

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<'a, T: ?Sized + Sealed> Sealed for &'a T {}
}

/// A type that can index into a [`JsonValue`]: `usize` into the `Array`
/// variant, string types into the `Object` variant.
///
/// Sealed; implemented for `usize`, `str` and `String` (plus references).
pub trait ValueIndex: private::Sealed {
    fn index_into<'v>(&self, value: &'v JsonValue) -> Option<&'v JsonValue>;
}

impl ValueIndex for usize {
    fn index_into<'v>(&self, value: &'v JsonValue) -> Option<&'v JsonValue> {
        match value {
            JsonValue::Array(items) => items.get(*self),
            _ => None,
        }
    }
}

impl ValueIndex for str {
    fn index_into<'v>(&self, value: &'v JsonValue) -> Option<&'v JsonValue> {
        match value {
            JsonValue::Object(map) => map.get(self),
            _ => None,
        }
    }
}

impl ValueIndex for String {
    fn index_into<'v>(&self, value: &'v JsonValue) -> Option<&'v JsonValue> {
        self.as_str().index_into(value)
    }
}

impl<'a, T: ?Sized + ValueIndex> ValueIndex for &'a T {
    fn index_into<'v>(&self, value: &'v JsonValue) -> Option<&'v JsonValue> {
        (**self).index_into(value)
    }
}
