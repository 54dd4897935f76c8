use std::borrow::Cow;

use tracing::trace;

use super::{find_index_by_criteria, item_pos};
use crate::criteria::Criteria;
use crate::shape::{Merge, Shape};

/// Removes the first element equal to `item`, or appends `item` if no element is equal to it.
pub fn toggle<T: PartialEq>(items: &mut Vec<T>, item: T) -> &mut Vec<T> {
    if let Some(pos) = item_pos(items, &item) {
        trace!(pos, "toggle: removing element");
        items.remove(pos);
    } else {
        trace!(len = items.len(), "toggle: appending element");
        items.push(item);
    }
    items
}

/// Removes the first element which matches `criteria`, or returns a copy of `items` with `item`
/// appended if no element matches.
///
/// The two outcomes differ in what happens to `items`:
///
/// * a match is removed from `items` in place, and the result borrows the modified vector.
/// * without a match `items` is left untouched and the result owns a new vector.
pub fn toggle_by_criteria<'s, T: Shape + Clone>(
    items: &'s mut Vec<T>,
    criteria: &Criteria<'_, T>,
    item: T,
) -> Cow<'s, [T]> {
    if let Some(pos) = find_index_by_criteria(items, criteria) {
        trace!(pos, "toggle_by_criteria: removing matching element");
        items.remove(pos);
        Cow::Borrowed(items.as_slice())
    } else {
        trace!(
            len = items.len(),
            "toggle_by_criteria: copying sequence with new element"
        );
        let mut new = Vec::with_capacity(items.len() + 1);
        new.extend_from_slice(items);
        new.push(item);
        Cow::Owned(new)
    }
}

/// Replaces the first element which matches `criteria` with `item`, or inserts `item` at the
/// front if no element matches.
pub fn splice_or_new_by_criteria<T: Shape>(
    items: &mut Vec<T>,
    criteria: &Criteria<'_, T>,
    item: T,
) {
    if let Some(pos) = find_index_by_criteria(items, criteria) {
        trace!(pos, "splice_or_new_by_criteria: replacing matching element");
        items[pos] = item;
    } else {
        trace!("splice_or_new_by_criteria: inserting element at front");
        items.insert(0, item);
    }
}

/// Merges `item` into the first element which matches `criteria`, or inserts `item` at the front
/// if no element matches.
///
/// See [`Merge`] for how the fields of `item` are layered over the existing element.
pub fn fill_or_new_by_criteria<T: Shape + Merge>(
    items: &mut Vec<T>,
    criteria: &Criteria<'_, T>,
    item: T,
) {
    if let Some(pos) = find_index_by_criteria(items, criteria) {
        trace!(pos, "fill_or_new_by_criteria: merging into matching element");
        items[pos].merge(item);
    } else {
        trace!("fill_or_new_by_criteria: inserting element at front");
        items.insert(0, item);
    }
}

/// Removes the first element equal to `item`. Does nothing if there's no such element.
pub fn remove<'s, T: PartialEq>(items: &'s mut Vec<T>, item: &T) -> &'s mut Vec<T> {
    if let Some(pos) = item_pos(items, item) {
        trace!(pos, "remove: removing element");
        items.remove(pos);
    }
    items
}

/// Removes the first element which matches `criteria`. Does nothing if no element matches.
pub fn remove_by_criteria<'s, T: Shape>(
    items: &'s mut Vec<T>,
    criteria: &Criteria<'_, T>,
) -> &'s mut Vec<T> {
    if let Some(pos) = find_index_by_criteria(items, criteria) {
        trace!(pos, "remove_by_criteria: removing matching element");
        items.remove(pos);
    }
    items
}

/// Moves the element at index `from` to index `to`.
///
/// The element is removed first, so `to` is an index into the shortened sequence.
///
/// # Panics
///
/// The indices aren't validated. Panics if `from >= items.len()` or if `to` is greater than the
/// length of the shortened sequence.
pub fn sort_move<T>(items: &mut Vec<T>, from: usize, to: usize) -> &mut Vec<T> {
    trace!(from, to, "sort_move: moving element");
    let el = items.remove(from);
    items.insert(to, el);
    items
}
