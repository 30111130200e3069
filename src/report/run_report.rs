use serde::Serialize;
use std::fmt::{Display, Formatter, Result};
use std::path::PathBuf;

use crate::approximation::Approximation;
use crate::comparison::Comparison;
use crate::reference::ReferenceValue;
use crate::utils::format_shortest;

/// What happened when the reference file was consulted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum ReferenceOutcome {
    Loaded {
        reference: ReferenceValue,
        computed: String,
        comparison: Comparison,
    },
    Missing {
        path: PathBuf,
    },
    Unreadable {
        path: PathBuf,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub approximation: Approximation,
    pub reference: ReferenceOutcome,
}

impl RunReport {
    pub fn comparison(&self) -> Option<&Comparison> {
        match &self.reference {
            ReferenceOutcome::Loaded { comparison, .. } => Some(comparison),
            _ => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn target_label(&self) -> String {
        if self.approximation.target == 2.0 {
            "two".to_string()
        } else {
            format_shortest(self.approximation.target)
        }
    }
}

impl Display for RunReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f)?;
        writeln!(
            f,
            "The square root of {} is: {}",
            self.target_label(),
            format_shortest(self.approximation.estimate)
        )?;
        writeln!(f)?;

        match &self.reference {
            ReferenceOutcome::Loaded {
                reference,
                computed,
                comparison,
            } => {
                writeln!(f)?;
                writeln!(f, "The reference value is:")?;
                writeln!(f, "{}", reference.as_str())?;
                writeln!(f)?;
                writeln!(f, "The value we computed is:")?;
                writeln!(f, "{computed}")?;
                writeln!(f)?;
                writeln!(f, "{comparison}")
            }
            ReferenceOutcome::Missing { path } => {
                writeln!(f, "Not able to find the file: {}", path.display())
            }
            ReferenceOutcome::Unreadable { path, reason } => {
                writeln!(f, "Not able to read the file: {} ({reason})", path.display())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approximation::sqrt_two;
    use crate::comparison::compare;
    use crate::reference::ReferenceMode;

    fn loaded(reference: &str) -> RunReport {
        let approximation = sqrt_two();
        let computed = format_shortest(approximation.estimate);
        let reference =
            ReferenceValue::parse(reference, ReferenceMode::Trimmed, "SquareRootTwo.txt").unwrap();
        let comparison = compare(&computed, reference.as_str());
        RunReport {
            approximation,
            reference: ReferenceOutcome::Loaded {
                reference,
                computed,
                comparison,
            },
        }
    }

    #[test]
    fn text_report_for_loaded_reference() {
        let r = loaded("1.41421356237309504880");
        let text = r.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "The square root of two is: 1.414213562373095");
        assert!(text.contains("The reference value is:\n1.41421356237309504880\n"));
        assert!(text.contains("The value we computed is:\n1.414213562373095\n"));
        assert!(text.ends_with("The numbers are identical to 16 significant digits.\n"));
        assert!(r.comparison().unwrap().is_identical());
    }

    #[test]
    fn text_report_for_missing_reference() {
        let r = RunReport {
            approximation: sqrt_two(),
            reference: ReferenceOutcome::Missing {
                path: PathBuf::from("SquareRootTwo.txt"),
            },
        };
        let text = r.to_string();
        assert!(text.contains("The square root of two is: 1.414213562373095"));
        assert!(text.ends_with("Not able to find the file: SquareRootTwo.txt\n"));
        assert!(r.comparison().is_none());
    }

    #[test]
    fn other_targets_are_printed_as_numbers() {
        let mut r = loaded("1.4");
        r.approximation.target = 3.0;
        assert!(r.to_string().contains("The square root of 3.0 is:"));
    }

    #[test]
    fn json_report_is_tagged() {
        let r = loaded("1.41421356237300000000");
        let v: serde_json::Value = serde_json::from_str(&r.to_json().unwrap()).unwrap();

        assert_eq!(v["approximation"]["iterations"], 5);
        assert_eq!(v["approximation"]["converged"], true);
        assert_eq!(v["reference"]["status"], "loaded");
        assert_eq!(v["reference"]["computed"], "1.414213562373095");
        assert_eq!(v["reference"]["comparison"]["outcome"], "differ");
        assert_eq!(v["reference"]["comparison"]["position"], 15);
    }
}
