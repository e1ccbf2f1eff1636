#![allow(dead_code)]

use rand::Rng;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A random sequence of small integers, so repeats are likely.
pub fn random_sequence(max_len: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let len = rng.gen_range(0..=max_len);
    (0..len).map(|_| rng.gen_range(0..10)).collect()
}

pub fn random_shift() -> i64 {
    rand::thread_rng().gen_range(-50..50)
}

pub fn sorted<T: Ord + Clone>(v: &[T]) -> Vec<T> {
    let mut v = v.to_vec();
    v.sort();
    v
}
