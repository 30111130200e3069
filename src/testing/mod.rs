pub mod fixtures;

pub use fixtures::{SQRT_TWO_DIGITS, random_targets, reference_file};
