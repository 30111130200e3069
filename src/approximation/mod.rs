mod error;
mod newton;

pub use error::ApproximationError;
pub use newton::{
    Approximation, DEFAULT_TOLERANCE_DENOMINATOR, MAX_ITERATIONS, NewtonSqrt, NewtonState,
    sqrt_two,
};
