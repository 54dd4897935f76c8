//! Helpers which operate on ordered sequences.
//!
//! Read-only helpers take a slice. Helpers which modify the sequence take a `&mut Vec<T>` and
//! change it in place; most of them hand the same vector back so calls can be chained.
//!
//! Element identity is `PartialEq`: [`toggle`], [`remove`] and [`unique`] treat two equal
//! elements as the same element.

mod edit;
mod find;
mod group;
mod unique;

/// Returns the 0-indexed position of the first element equal to `item`, if it's found
fn item_pos<T: PartialEq>(items: &[T], item: &T) -> Option<usize> {
    items.iter().position(|v| v == item)
}

pub use edit::*;
pub use find::*;
pub use group::*;
pub use unique::*;
