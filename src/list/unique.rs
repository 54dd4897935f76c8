use std::borrow::Cow;
use std::collections::HashSet;

use super::item_pos;
use crate::shape::Shape;
use crate::types::Value;

/// Returns a new sequence which holds the first occurrence of each distinct element, in input
/// order.
///
/// Elements are only required to be `PartialEq`, so every element is compared against the ones
/// kept so far. This is O(n²); [`unique_by_keys`] hashes the key fields instead.
#[must_use]
pub fn unique<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut res: Vec<T> = Vec::with_capacity(items.len());
    for it in items {
        if item_pos(&res, it).is_none() {
            res.push(it.clone());
        }
    }
    res
}

/// Returns a new sequence which holds the first element for each distinct combination of values
/// in the fields named by `keys`, in input order.
///
/// A field which is missing on an element is distinct from every value, including `Null`.
#[must_use]
pub fn unique_by_keys<T, I>(items: &[T], keys: I) -> Vec<T>
where
    T: Shape + Clone,
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let keys: Vec<Value> = keys.into_iter().map(Into::into).collect();
    let mut seen: HashSet<Vec<Option<Value>>> = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|it| {
            let fields = keys
                .iter()
                .map(|k| it.field(k).map(Cow::into_owned))
                .collect::<Vec<_>>();
            seen.insert(fields)
        })
        .cloned()
        .collect()
}
