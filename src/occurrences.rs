use std::collections::HashMap;
use std::hash::Hash;

/// Counts how many times each distinct element appears in `sequence`.
pub fn count_occurrences<T: Clone + Eq + Hash>(sequence: &[T]) -> HashMap<T, usize> {
    let mut counts: HashMap<T, usize> = HashMap::new();
    for elem in sequence {
        *counts.entry(elem.clone()).or_insert(0) += 1;
    }
    counts
}

/// Like `count_occurrences`, but returns `(element, count)` pairs ordered by
/// where each element first shows up. Useful when the output has to be stable.
pub fn occurrence_table<T: Clone + Eq + Hash>(sequence: &[T]) -> Vec<(T, usize)> {
    let mut slots: HashMap<&T, usize> = HashMap::new();
    let mut table: Vec<(T, usize)> = Vec::new();
    for elem in sequence {
        match slots.get(elem) {
            Some(&slot) => table[slot].1 += 1,
            None => {
                slots.insert(elem, table.len());
                table.push((elem.clone(), 1));
            }
        }
    }
    table
}
