//! Helpers for the ordered collections nested inside an aggregate.
//!
//! New entries go to the front, so collections read newest first. Removal
//! always goes through an explicit lookup; a missing entry never mutates the
//! collection.

use uuid::Uuid;

/// Anything carrying a stable identifier.
pub trait Identified {
    fn id(&self) -> Uuid;
}

/// Position of the first entry satisfying `predicate`.
pub fn find_index<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> Option<usize> {
    items.iter().position(predicate)
}

/// Position of the entry whose id renders as `target`.
///
/// A target that is not a valid id is simply not found.
pub fn find_index_by_id<T: Identified>(items: &[T], target: &str) -> Option<usize> {
    let target = Uuid::parse_str(target).ok()?;
    find_index(items, |item| item.id() == target)
}

pub fn insert_front<T>(items: &mut Vec<T>, item: T) {
    items.insert(0, item);
}

/// Remove the entry at `index`, or do nothing when it is out of range.
pub fn remove_at<T>(items: &mut Vec<T>, index: usize) -> Option<T> {
    (index < items.len()).then(|| items.remove(index))
}
