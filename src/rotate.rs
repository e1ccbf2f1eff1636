/// Normalizes `shift` into `[0, len)` using floored modulo, so a negative shift
/// rotates right and a shift past the end wraps around.
///
/// Returns 0 for an empty sequence instead of dividing by zero.
pub fn effective_shift(len: usize, shift: i64) -> usize {
    if len == 0 {
        return 0;
    }
    // i128 holds every usize length and every i64 shift without overflow.
    (shift as i128).rem_euclid(len as i128) as usize
}

/// Returns a new vector holding `sequence` rotated left by `shift` positions.
///
/// `result[i] == sequence[(i + k) % len]` where `k` is the normalized shift.
/// The first `k` elements of the input end up at the back of the result.
///
/// ```
/// use array_drills::rotate;
///
/// assert_eq!(rotate(&[1, 2, 3, 4, 5], 2), vec![3, 4, 5, 1, 2]);
/// assert_eq!(rotate(&[1, 2, 3, 4, 5], 7), vec![3, 4, 5, 1, 2]);
/// assert_eq!(rotate(&[1, 2, 3, 4, 5], -1), vec![5, 1, 2, 3, 4]);
/// ```
pub fn rotate<T: Clone>(sequence: &[T], shift: i64) -> Vec<T> {
    let len = sequence.len();
    if len == 0 {
        return Vec::new();
    }
    let k = effective_shift(len, shift);
    log::debug!("rotating {} elements by {} (normalized to {})", len, shift, k);

    let mut rotated = Vec::with_capacity(len);
    for i in 0..len {
        rotated.push(sequence[(i + k) % len].clone());
    }
    rotated
}

/// Rotates `sequence` left by `shift` positions without allocating.
pub fn rotate_in_place<T>(sequence: &mut [T], shift: i64) {
    let k = effective_shift(sequence.len(), shift);
    if k != 0 {
        sequence.rotate_left(k);
    }
}
