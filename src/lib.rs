pub mod approximation;
pub mod comparison;
pub mod config;
pub mod reference;
pub mod report;
pub mod tasks;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
