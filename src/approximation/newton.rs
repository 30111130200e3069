use serde::Serialize;
use tracing::{debug, trace};

use crate::approximation::ApproximationError;

/// Hard cap on Newton iterations; the loop stops here even without convergence.
pub const MAX_ITERATIONS: u32 = 20;

/// Relative tolerance denominator: the loop ends once two successive guesses
/// differ by no more than `guess / DEFAULT_TOLERANCE_DENOMINATOR`.
pub const DEFAULT_TOLERANCE_DENOMINATOR: f64 = 1e10;

/// State of one Newton (Babylonian) square-root iteration.
///
/// Holds the previous and current guesses, the iteration counter and the
/// relative limit derived from the current guess. [`step`](Self::step) is the
/// only transition; the loop driving it lives in [`NewtonSqrt::approximate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonState {
    target: f64,
    tolerance_denominator: f64,
    old_guess: f64,
    new_guess: f64,
    limit: f64,
    iteration: u32,
}

impl NewtonState {
    /// Starts at `target / 2` with both guesses equal and no iteration done.
    pub fn new(target: f64, tolerance_denominator: f64) -> Self {
        let guess = target / 2.0;
        Self {
            target,
            tolerance_denominator,
            old_guess: guess,
            new_guess: guess,
            limit: guess / tolerance_denominator,
            iteration: 0,
        }
    }

    /// Performs one iteration: `x' = (x + v/x) / 2`, then rescales the limit
    /// to the new guess.
    #[inline]
    pub fn step(&mut self) {
        self.iteration += 1;
        self.old_guess = self.new_guess;
        self.new_guess = (self.old_guess + self.target / self.old_guess) / 2.0;
        self.limit = self.new_guess / self.tolerance_denominator;
    }

    #[inline]
    pub fn delta(&self) -> f64 {
        libm::fabs(self.old_guess - self.new_guess)
    }

    /// True once the last step moved the guess by no more than the limit.
    #[inline]
    pub fn within_limit(&self) -> bool {
        self.delta() <= self.limit
    }

    #[inline]
    pub fn should_continue(&self, max_iterations: u32) -> bool {
        self.delta() > self.limit && self.iteration < max_iterations
    }

    pub fn old_guess(&self) -> f64 {
        self.old_guess
    }

    pub fn new_guess(&self) -> f64 {
        self.new_guess
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn iteration(&self) -> u32 {
        self.iteration
    }
}

/// Frozen outcome of a bounded Newton run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Approximation {
    pub target: f64,
    pub estimate: f64,
    pub previous: f64,
    pub iterations: u32,
    pub limit: f64,
    /// `false` when the run stopped on the iteration cap instead of the limit.
    pub converged: bool,
}

impl Approximation {
    fn from_state(state: &NewtonState) -> Self {
        Self {
            target: state.target,
            estimate: state.new_guess,
            previous: state.old_guess,
            iterations: state.iteration,
            limit: state.limit,
            converged: state.new_guess.is_finite() && state.within_limit(),
        }
    }

    /// Absolute residual `|estimate² - target|`.
    pub fn residual(&self) -> f64 {
        libm::fabs(self.estimate * self.estimate - self.target)
    }
}

/// Newton square-root approximator with a relative convergence limit and an
/// iteration cap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonSqrt {
    tolerance_denominator: f64,
    max_iterations: u32,
}

impl NewtonSqrt {
    pub fn new(tolerance_denominator: f64, max_iterations: u32) -> Result<Self, ApproximationError> {
        if !tolerance_denominator.is_finite() || tolerance_denominator <= 0.0 {
            return Err(ApproximationError::InvalidTolerance(tolerance_denominator));
        }
        if max_iterations == 0 || max_iterations > MAX_ITERATIONS {
            return Err(ApproximationError::InvalidIterationCap {
                got: max_iterations,
                max: MAX_ITERATIONS,
            });
        }
        Ok(Self {
            tolerance_denominator,
            max_iterations,
        })
    }

    pub fn tolerance_denominator(&self) -> f64 {
        self.tolerance_denominator
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Accepts targets whose starting guess `target / 2` is a normal positive
    /// `f64`; subnormal halves make the first `target / guess` overflow.
    pub fn check_target(target: f64) -> Result<(), ApproximationError> {
        let half = target / 2.0;
        if !target.is_finite() || !half.is_normal() || half <= 0.0 {
            return Err(ApproximationError::InvalidTarget(target));
        }
        Ok(())
    }

    pub fn approximate(&self, target: f64) -> Result<Approximation, ApproximationError> {
        Self::check_target(target)?;
        Ok(self.run(target))
    }

    fn run(&self, target: f64) -> Approximation {
        let mut state = NewtonState::new(target, self.tolerance_denominator);
        loop {
            state.step();
            trace!(
                iteration = state.iteration,
                old_guess = state.old_guess,
                new_guess = state.new_guess,
                limit = state.limit,
                "newton step"
            );
            if !state.should_continue(self.max_iterations) {
                break;
            }
        }

        let approximation = Approximation::from_state(&state);
        debug!(
            value = target,
            estimate = approximation.estimate,
            iterations = approximation.iterations,
            converged = approximation.converged,
            "newton run finished"
        );
        approximation
    }
}

impl Default for NewtonSqrt {
    fn default() -> Self {
        Self {
            tolerance_denominator: DEFAULT_TOLERANCE_DENOMINATOR,
            max_iterations: MAX_ITERATIONS,
        }
    }
}

/// √2 with the default tolerance and iteration cap.
pub fn sqrt_two() -> Approximation {
    NewtonSqrt::default().run(2.0)
}
