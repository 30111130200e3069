use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApproximationError {
    #[error("target must be finite and >= 2 * f64::MIN_POSITIVE, got {0}")]
    InvalidTarget(f64),

    #[error("tolerance denominator must be finite and > 0, got {0}")]
    InvalidTolerance(f64),

    #[error("iteration cap must be in [1, {max}], got {got}")]
    InvalidIterationCap { got: u32, max: u32 },
}
