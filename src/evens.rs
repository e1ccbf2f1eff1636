use std::ops::Rem;

/// Keeps only the even values of `sequence`, in order.
pub fn filter_even<N>(sequence: &[N]) -> Vec<N>
where
    N: Copy + PartialEq + Rem<Output = N> + From<u8>,
{
    let two = N::from(2);
    let zero = N::from(0);
    sequence.iter().copied().filter(|&x| x % two == zero).collect()
}
