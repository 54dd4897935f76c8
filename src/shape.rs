//! Field access and shallow merging for sequence elements.
//!
//! [`Shape`] gives shape descriptors a way to look at an element's fields, [`Merge`] layers one
//! element over another. Both are implemented for the dynamic [`Value`] and [`Mapping`] types;
//! user types implement them to take part in shape matching and in
//! [`fill_or_new_by_criteria`](crate::list::fill_or_new_by_criteria).

use std::borrow::Cow;

use crate::types::{Mapping, Value};

/// Exposes the named fields of an element to shape descriptors.
pub trait Shape {
    /// Returns the value of field `key`, or `None` if the element has no such field.
    fn field(&self, key: &Value) -> Option<Cow<'_, Value>>;

    /// Checks whether every field named in `descriptor` exists on `self` with an equal value.
    ///
    /// The comparison is shallow: nested mappings in the descriptor must equal the element's
    /// field as a whole. An empty descriptor is met by every element.
    fn meets_criteria(&self, descriptor: &Mapping) -> bool {
        descriptor
            .iter()
            .all(|(k, expected)| self.field(k).is_some_and(|v| *v == *expected))
    }
}

impl Shape for Mapping {
    #[inline]
    fn field(&self, key: &Value) -> Option<Cow<'_, Value>> {
        self.get(key).map(Cow::Borrowed)
    }
}

impl Shape for Value {
    /// Only `Value::Mapping` has fields.
    #[inline]
    fn field(&self, key: &Value) -> Option<Cow<'_, Value>> {
        self.as_mapping().and_then(|m| m.field(key))
    }
}

impl<T: Shape + ?Sized> Shape for &T {
    #[inline]
    fn field(&self, key: &Value) -> Option<Cow<'_, Value>> {
        (**self).field(key)
    }
}

impl<T: Shape + ?Sized> Shape for Box<T> {
    #[inline]
    fn field(&self, key: &Value) -> Option<Cow<'_, Value>> {
        (**self).field(key)
    }
}

// Scalars have no fields, so they only meet empty descriptors.
macro_rules! fieldless {
    ($($ty:ty)*) => {
        $(
            impl Shape for $ty {
                #[inline]
                fn field(&self, _key: &Value) -> Option<Cow<'_, Value>> {
                    None
                }
            }
        )*
    }
}

fieldless! {
    bool char str String
    i8 i16 i32 i64 i128 isize
    u8 u16 u32 u64 u128 usize
    f32 f64
}

/// Layers another element's fields over an existing element, in place.
pub trait Merge {
    /// Merges `other` into `self`. Fields present in `other` take precedence.
    fn merge(&mut self, other: Self);
}

impl Merge for Mapping {
    /// Overwrites existing keys in place and appends keys which are new to `self` at the end.
    fn merge(&mut self, other: Self) {
        self.extend(other);
    }
}

impl Merge for Value {
    /// Two mappings are merged key by key, and a value without fields leaves a mapping
    /// untouched. Any other value is replaced by `other`.
    fn merge(&mut self, other: Self) {
        match (self, other) {
            (Value::Mapping(m), Value::Mapping(o)) => m.merge(o),
            (Value::Mapping(_), _) => {}
            (this, other) => *this = other,
        }
    }
}
