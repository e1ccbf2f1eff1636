use crate::timing;
use std::collections::HashSet;
use std::hash::Hash;
use std::time::Duration;

/// Drops every element that already appeared earlier in `sequence`, keeping
/// first occurrences in their original order.
pub fn deduplicate<T: Clone + Eq + Hash>(sequence: &[T]) -> Vec<T> {
    let mut seen: HashSet<&T> = HashSet::new();
    let mut unique = Vec::new();
    for elem in sequence {
        if seen.insert(elem) {
            unique.push(elem.clone());
        }
    }
    unique
}

/// Same as `deduplicate`, but reports how long the work took to `hook`.
pub fn deduplicate_timed<T, H>(sequence: &[T], hook: H) -> Vec<T>
where
    T: Clone + Eq + Hash,
    H: FnOnce(Duration),
{
    timing::timed(|| deduplicate(sequence), hook)
}
