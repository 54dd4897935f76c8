use indexmap::IndexMap;
use std::hash::Hash;

/// Groups elements by the key `classify` computes for them.
///
/// Groups appear in the order in which their key was first produced, and each group keeps the
/// relative order of its elements. Pass `&items` to group references, or `items` to group the
/// elements themselves.
#[must_use]
pub fn group_by_condition<I, K, F>(items: I, mut classify: F) -> IndexMap<K, Vec<I::Item>>
where
    I: IntoIterator,
    K: Hash + Eq,
    F: FnMut(&I::Item) -> K,
{
    let mut groups: IndexMap<K, Vec<I::Item>> = IndexMap::new();
    for it in items {
        groups.entry(classify(&it)).or_default().push(it);
    }
    groups
}
