//! Small sequence exercises: rotation, reversal, common elements, occurrence
//! counting, deduplication, even filtering and summing.
//!
//! Every operation borrows its input and either returns a fresh `Vec` or works
//! on the `&mut` slice it was handed. Nothing is kept between calls.

pub mod common;
pub mod dedup;
pub mod evens;
pub mod input;
pub mod occurrences;
pub mod reverse;
pub mod rotate;
pub mod sum;
pub mod timing;

pub use common::common_elements;
pub use dedup::{deduplicate, deduplicate_timed};
pub use evens::filter_even;
pub use occurrences::{count_occurrences, occurrence_table};
pub use reverse::{reverse, reverse_in_place, reverse_recursive};
pub use rotate::{rotate, rotate_in_place};
pub use sum::{checked_sum, sum, sum_by_loop};
