use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::approximation::{Approximation, NewtonSqrt};
use crate::comparison::compare;
use crate::config::RunConfig;
use crate::reference::{ReferenceError, ReferenceValue};
use crate::report::{ReferenceOutcome, RunReport};

/// Approximates the square root, then checks it against the reference file.
///
/// A missing or unreadable reference never fails the run: it is recorded in
/// the report after the approximation, which is always produced first.
pub struct SqrtCheckTask {
    config: RunConfig,
    solver: NewtonSqrt,
}

impl SqrtCheckTask {
    pub fn new(config: RunConfig) -> Result<Self> {
        config.validate().context("invalid run configuration")?;
        let solver = config.solver()?;
        Ok(Self { config, solver })
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn approximate(&self) -> Result<Approximation> {
        self.solver
            .approximate(self.config.target)
            .with_context(|| format!("approximating sqrt({})", self.config.target))
    }

    pub fn run(&self) -> Result<RunReport> {
        let approximation = self.approximate()?;
        info!(
            estimate = approximation.estimate,
            iterations = approximation.iterations,
            "approximation done"
        );
        if !approximation.converged {
            warn!(
                cap = self.solver.max_iterations(),
                "iteration cap reached before the relative limit"
            );
        }

        let reference = self.check(&approximation);
        Ok(RunReport {
            approximation,
            reference,
        })
    }

    fn check(&self, approximation: &Approximation) -> ReferenceOutcome {
        let path = &self.config.reference_path;
        match ReferenceValue::load(path, self.config.reference_mode) {
            Ok(reference) => {
                let computed = self
                    .config
                    .estimate_format
                    .render(approximation.estimate, Some(&reference));
                let comparison = compare(&computed, reference.as_str());
                info!(?comparison, "compared against reference");
                ReferenceOutcome::Loaded {
                    reference,
                    computed,
                    comparison,
                }
            }
            Err(ReferenceError::NotFound { path }) => {
                warn!(path = %path.display(), "reference file not found");
                ReferenceOutcome::Missing { path }
            }
            Err(e @ (ReferenceError::Io { .. } | ReferenceError::Malformed { .. })) => {
                warn!(error = %e, "reference file unusable");
                ReferenceOutcome::Unreadable {
                    path: path.clone(),
                    reason: describe(&e),
                }
            }
        }
    }
}

// error chain flattened into one line
fn describe(err: &ReferenceError) -> String {
    use std::error::Error;

    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(s) = source {
        out.push_str(": ");
        out.push_str(&s.to_string());
        source = s.source();
    }
    out
}
