use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::reference::ReferenceValue;

/// How the final estimate is turned into the string that gets compared.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum EstimateFormat {
    /// Shortest decimal that round-trips to the same `f64`.
    #[default]
    Shortest,
    /// Fixed point with as many fractional digits as the reference value.
    MatchReference,
}

impl EstimateFormat {
    pub fn render(self, value: f64, reference: Option<&ReferenceValue>) -> String {
        match self {
            EstimateFormat::Shortest => format_shortest(value),
            EstimateFormat::MatchReference => {
                match reference.and_then(ReferenceValue::fractional_digits) {
                    Some(decimals) => format_fixed(value, decimals),
                    None => format_shortest(value),
                }
            }
        }
    }
}

/// Shortest round-trip form, always carrying a decimal point for finite values
/// (`2.0`, not `2`).
#[inline]
pub fn format_shortest(value: f64) -> String {
    let s = value.to_string();
    if value.is_finite() && !s.contains('.') {
        format!("{s}.0")
    } else {
        s
    }
}

#[inline]
pub fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}
