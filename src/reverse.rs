/// Returns the elements of `sequence` in opposite order.
pub fn reverse<T: Clone>(sequence: &[T]) -> Vec<T> {
    let mut reversed = Vec::with_capacity(sequence.len());
    let mut i = sequence.len();
    while i > 0 {
        i -= 1;
        reversed.push(sequence[i].clone());
    }
    reversed
}

/// Reverses `sequence` in place by swapping pairs from both ends toward the middle.
pub fn reverse_in_place<T>(sequence: &mut [T]) {
    if sequence.is_empty() {
        return;
    }
    let mut front = 0;
    let mut back = sequence.len() - 1;
    while front < back {
        sequence.swap(front, back);
        front += 1;
        back -= 1;
    }
}

/// Reverses `sequence` in place: swap the outer pair, then recurse on what is
/// left between them.
pub fn reverse_recursive<T>(sequence: &mut [T]) {
    let len = sequence.len();
    if len < 2 {
        return;
    }
    sequence.swap(0, len - 1);
    reverse_recursive(&mut sequence[1..len - 1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word() -> Vec<char> {
        vec!['r', 'e', 'v', 'e', 'r', 's', 'e']
    }

    #[test]
    fn test_reverse_word() {
        assert_eq!(reverse(&word()), vec!['e', 's', 'r', 'e', 'v', 'e', 'r']);
    }

    #[test]
    fn test_reverse_in_place_word() {
        let mut w = word();
        reverse_in_place(&mut w);
        assert_eq!(w, vec!['e', 's', 'r', 'e', 'v', 'e', 'r']);
    }

    #[test]
    fn test_reverse_recursive_word() {
        let mut w = word();
        reverse_recursive(&mut w);
        assert_eq!(w, vec!['e', 's', 'r', 'e', 'v', 'e', 'r']);
    }

    #[test]
    fn test_reverse_even_length() {
        let mut a = vec![1, 2, 3, 4];
        let mut b = a.clone();
        assert_eq!(reverse(&a), vec![4, 3, 2, 1]);
        reverse_in_place(&mut a);
        reverse_recursive(&mut b);
        assert_eq!(a, vec![4, 3, 2, 1]);
        assert_eq!(b, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_reverse_empty_and_single() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(reverse(&empty), empty);

        let mut e = empty.clone();
        reverse_in_place(&mut e);
        reverse_recursive(&mut e);
        assert!(e.is_empty());

        let mut one = vec![7];
        reverse_in_place(&mut one);
        assert_eq!(one, vec![7]);
        reverse_recursive(&mut one);
        assert_eq!(one, vec![7]);
    }

    #[test]
    fn test_reverse_twice_is_identity() {
        let v = vec!["x", "y", "z", "w", "v"];
        assert_eq!(reverse(&reverse(&v)), v);
    }
}
