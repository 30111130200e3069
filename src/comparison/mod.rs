mod comparison;

pub use comparison::{Comparison, compare};
