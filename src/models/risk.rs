//! Workplace risk classification for ARL contributions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five-level Colombian workplace risk classification.
///
/// The ARL (occupational risk insurance) contribution rate varies by risk
/// level, from administrative work (level I) up to high-risk activities
/// such as mining or heights work (level V). The classification applies
/// uniformly to the whole roster, not per employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArlRiskLevel {
    /// Minimal risk (administrative and commercial activities).
    I,
    /// Low risk (some manufacturing processes).
    II,
    /// Medium risk (most manufacturing).
    III,
    /// High risk (construction, transport of flammables).
    IV,
    /// Maximum risk (mining, work at heights, explosives).
    V,
}

impl ArlRiskLevel {
    /// All risk levels, in ascending order of rate.
    pub const ALL: [ArlRiskLevel; 5] = [
        ArlRiskLevel::I,
        ArlRiskLevel::II,
        ArlRiskLevel::III,
        ArlRiskLevel::IV,
        ArlRiskLevel::V,
    ];
}

impl fmt::Display for ArlRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let roman = match self {
            ArlRiskLevel::I => "I",
            ArlRiskLevel::II => "II",
            ArlRiskLevel::III => "III",
            ArlRiskLevel::IV => "IV",
            ArlRiskLevel::V => "V",
        };
        write!(f, "{}", roman)
    }
}
