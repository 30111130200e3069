use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::approximation::{DEFAULT_TOLERANCE_DENOMINATOR, MAX_ITERATIONS, NewtonSqrt};
use crate::config::ConfigError;
use crate::reference::{DEFAULT_REFERENCE_FILE, ReferenceMode};
use crate::utils::EstimateFormat;

const DEFAULT_TARGET: f64 = 2.0;

fn default_target() -> f64 {
    DEFAULT_TARGET
}

fn default_tolerance_denominator() -> f64 {
    DEFAULT_TOLERANCE_DENOMINATOR
}

fn default_max_iterations() -> u32 {
    MAX_ITERATIONS
}

fn default_reference_path() -> PathBuf {
    PathBuf::from(DEFAULT_REFERENCE_FILE)
}

/// Parameters of one approximate-and-check run.
///
/// The binary always uses [`RunConfig::default`]; JSON loading exists for
/// library callers that want other values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Value whose square root is approximated.
    #[serde(default = "default_target")]
    pub target: f64,

    /// The loop ends once successive guesses differ by at most guess / this.
    #[serde(default = "default_tolerance_denominator")]
    pub tolerance_denominator: f64,

    /// Hard cap on Newton iterations.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Text file holding the reference decimal value.
    #[serde(default = "default_reference_path")]
    pub reference_path: PathBuf,

    /// How file lines are normalized into the reference string.
    #[serde(default)]
    pub reference_mode: ReferenceMode,

    /// How the estimate is rendered before comparison.
    #[serde(default)]
    pub estimate_format: EstimateFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            tolerance_denominator: DEFAULT_TOLERANCE_DENOMINATOR,
            max_iterations: MAX_ITERATIONS,
            reference_path: default_reference_path(),
            reference_mode: ReferenceMode::default(),
            estimate_format: EstimateFormat::default(),
        }
    }
}

impl RunConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: RunConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path)?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        NewtonSqrt::check_target(self.target)?;
        if self.reference_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidParameter(
                "reference_path cannot be empty".into(),
            ));
        }
        self.solver()?;
        Ok(())
    }

    pub fn solver(&self) -> Result<NewtonSqrt, ConfigError> {
        Ok(NewtonSqrt::new(
            self.tolerance_denominator,
            self.max_iterations,
        )?)
    }
}
