/// Returns the elements of `a` that also appear somewhere in `b`, in `a`'s
/// order. Repeats in `a` are kept.
pub fn common_elements<T: Clone + PartialEq>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|x| b.contains(*x)).cloned().collect()
}
