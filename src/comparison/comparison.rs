use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

/// Result of scanning a computed decimal string against a reference string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum Comparison {
    /// Every character of the computed string matched. The count excludes
    /// one position, so `"1.5"` is identical to 2 significant digits.
    Identical { significant_digits: usize },

    /// First 0-based position where the two strings disagree.
    Differ { position: usize },

    /// The reference ran out before the computed string did; `position` is
    /// the reference length.
    Truncated { position: usize },
}

impl Comparison {
    pub fn first_difference(&self) -> Option<usize> {
        match *self {
            Comparison::Identical { .. } => None,
            Comparison::Differ { position } | Comparison::Truncated { position } => Some(position),
        }
    }

    pub fn is_identical(&self) -> bool {
        matches!(self, Comparison::Identical { .. })
    }
}

impl Display for Comparison {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Comparison::Identical { significant_digits } => write!(
                f,
                "The numbers are identical to {significant_digits} significant digits."
            ),
            Comparison::Differ { position } => {
                write!(f, "The numbers differ at position {position}")
            }
            Comparison::Truncated { position } => write!(
                f,
                "The numbers differ at position {position}; the reference value ends there"
            ),
        }
    }
}

/// Scans `computed` left to right against `reference`.
///
/// Only the first `computed.len()` characters of `reference` are looked at;
/// anything the reference carries beyond that is ignored. A reference shorter
/// than `computed` is reported as [`Comparison::Truncated`] rather than read
/// past its end.
pub fn compare(computed: &str, reference: &str) -> Comparison {
    let mut reference_chars = reference.chars();
    let mut scanned = 0usize;

    for (position, c) in computed.chars().enumerate() {
        match reference_chars.next() {
            None => return Comparison::Truncated { position },
            Some(r) if r != c => return Comparison::Differ { position },
            Some(_) => scanned += 1,
        }
    }

    Comparison::Identical {
        significant_digits: scanned.saturating_sub(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_when_reference_extends_computed() {
        let c = compare("1.4142135623730951", "1.4142135623730951...");
        assert!(c.is_identical());
        assert_eq!(c, Comparison::Identical { significant_digits: 17 });
        assert_eq!(c.first_difference(), None);
    }

    #[test]
    fn reports_first_mismatch() {
        let c = compare("1.4142135623730951", "1.4142135623730000");
        assert_eq!(c, Comparison::Differ { position: 15 });
        assert_eq!(c.first_difference(), Some(15));
    }

    #[test]
    fn mismatch_at_start() {
        assert_eq!(compare("2.0", "1.0"), Comparison::Differ { position: 0 });
    }

    #[test]
    fn short_reference_is_truncated_not_a_fault() {
        let c = compare("1.4142135623730951", "1.41421");
        assert_eq!(c, Comparison::Truncated { position: 7 });
        assert!(!c.is_identical());

        assert_eq!(compare("1.4", ""), Comparison::Truncated { position: 0 });
    }

    #[test]
    fn mismatch_wins_over_truncation() {
        assert_eq!(compare("1.45", "1.3"), Comparison::Differ { position: 2 });
    }

    #[test]
    fn empty_computed_is_trivially_identical() {
        assert_eq!(
            compare("", "1.41"),
            Comparison::Identical { significant_digits: 0 }
        );
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            Comparison::Identical { significant_digits: 16 }.to_string(),
            "The numbers are identical to 16 significant digits."
        );
        assert_eq!(
            Comparison::Differ { position: 15 }.to_string(),
            "The numbers differ at position 15"
        );
        assert_eq!(
            Comparison::Truncated { position: 3 }.to_string(),
            "The numbers differ at position 3; the reference value ends there"
        );
    }
}
