use crate::criteria::Criteria;
use crate::shape::Shape;

/// Returns the first element which matches `criteria`, or `None` if no element does.
#[must_use]
pub fn find_by_criteria<'s, T: Shape>(
    items: &'s [T],
    criteria: &Criteria<'_, T>,
) -> Option<&'s T> {
    items.iter().find(|it| criteria.matches(it))
}

/// Returns the index of the first element which matches `criteria`, or `None` if no element does.
#[must_use]
pub fn find_index_by_criteria<T: Shape>(
    items: &[T],
    criteria: &Criteria<'_, T>,
) -> Option<usize> {
    items.iter().position(|it| criteria.matches(it))
}

/// Returns the last element, or `None` for an empty sequence.
#[inline]
#[must_use]
pub fn last<T>(items: &[T]) -> Option<&T> {
    items.last()
}

/// Checks whether any element matches `criteria`.
#[must_use]
pub fn meets_criteria<T: Shape>(items: &[T], criteria: &Criteria<'_, T>) -> bool {
    find_by_criteria(items, criteria).is_some()
}
