use std::ops::Add;

/// Adds up `sequence` with a fold. An empty sequence sums to 0.
pub fn sum<N>(sequence: &[N]) -> N
where
    N: Copy + Add<Output = N> + From<u8>,
{
    sequence.iter().fold(N::from(0), |total, &x| total + x)
}

/// Adds up `sequence` one element at a time.
pub fn sum_by_loop<N>(sequence: &[N]) -> N
where
    N: Copy + Add<Output = N> + From<u8>,
{
    let mut total = N::from(0);
    for &x in sequence {
        total = total + x;
    }
    total
}

/// Adds up `sequence`, or returns `None` if the total does not fit in an `i64`.
pub fn checked_sum(sequence: &[i64]) -> Option<i64> {
    sequence.iter().try_fold(0i64, |total, &x| total.checked_add(x))
}
