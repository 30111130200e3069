pub mod number_format;

pub use number_format::{EstimateFormat, format_fixed, format_shortest};
