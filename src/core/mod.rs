/// Level domain for CIA triad assessments
///
/// Everything downstream keys off the ordered `SecurityLevel` scale and the
/// closed `CiaComponent` set. Both are exhaustive enums so that adding a
/// level or component forces every calculator to be revisited at compile
/// time instead of falling through a string-keyed default branch.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordinal security level with fixed total order.
///
/// `None < Low < Moderate < High < VeryHigh` — the derived `Ord` is load
/// bearing: weakest-link and strongest-link aggregations both rely on it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
pub enum SecurityLevel {
    None,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl SecurityLevel {
    /// All levels in ascending order.
    pub const ALL: [SecurityLevel; 5] = [
        SecurityLevel::None,
        SecurityLevel::Low,
        SecurityLevel::Moderate,
        SecurityLevel::High,
        SecurityLevel::VeryHigh,
    ];

    /// Numeric magnitude used by score aggregation: None=0 .. VeryHigh=100.
    pub fn score(&self) -> f64 {
        match self {
            SecurityLevel::None => 0.0,
            SecurityLevel::Low => 25.0,
            SecurityLevel::Moderate => 50.0,
            SecurityLevel::High => 75.0,
            SecurityLevel::VeryHigh => 100.0,
        }
    }

    /// Position on the five-step scale (0..=4).
    pub fn index(&self) -> usize {
        match self {
            SecurityLevel::None => 0,
            SecurityLevel::Low => 1,
            SecurityLevel::Moderate => 2,
            SecurityLevel::High => 3,
            SecurityLevel::VeryHigh => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SecurityLevel::None => "None",
            SecurityLevel::Low => "Low",
            SecurityLevel::Moderate => "Moderate",
            SecurityLevel::High => "High",
            SecurityLevel::VeryHigh => "Very High",
        }
    }

    /// Next level up, or `None` when already at the top of the scale.
    pub fn next_up(&self) -> Option<SecurityLevel> {
        match self {
            SecurityLevel::None => Some(SecurityLevel::Low),
            SecurityLevel::Low => Some(SecurityLevel::Moderate),
            SecurityLevel::Moderate => Some(SecurityLevel::High),
            SecurityLevel::High => Some(SecurityLevel::VeryHigh),
            SecurityLevel::VeryHigh => None,
        }
    }

    /// Defensive default for optional level input: absent means `None`.
    ///
    /// Callers that can genuinely lack a selection get graceful degradation
    /// instead of an error; the downgrade is logged so upstream bugs stay
    /// visible.
    pub fn or_none(level: Option<SecurityLevel>) -> SecurityLevel {
        match level {
            Some(level) => level,
            None => {
                log::warn!("missing security level, defaulting to None");
                SecurityLevel::None
            }
        }
    }
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SecurityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(SecurityLevel::None),
            "low" => Ok(SecurityLevel::Low),
            "moderate" => Ok(SecurityLevel::Moderate),
            "high" => Ok(SecurityLevel::High),
            "very high" | "very-high" | "veryhigh" => Ok(SecurityLevel::VeryHigh),
            other => Err(format!("unknown security level: {other}")),
        }
    }
}

/// One dimension of the CIA triad. Closed set, not extensible at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CiaComponent {
    Availability,
    Integrity,
    Confidentiality,
}

impl CiaComponent {
    pub const ALL: [CiaComponent; 3] = [
        CiaComponent::Availability,
        CiaComponent::Integrity,
        CiaComponent::Confidentiality,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CiaComponent::Availability => "Availability",
            CiaComponent::Integrity => "Integrity",
            CiaComponent::Confidentiality => "Confidentiality",
        }
    }
}

impl fmt::Display for CiaComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable `(availability, integrity, confidentiality)` selection.
///
/// Pure input owned by the caller; the engine never stores or mutates one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SecurityLevelTriple {
    pub availability: SecurityLevel,
    pub integrity: SecurityLevel,
    pub confidentiality: SecurityLevel,
}

impl SecurityLevelTriple {
    pub fn new(
        availability: SecurityLevel,
        integrity: SecurityLevel,
        confidentiality: SecurityLevel,
    ) -> Self {
        Self {
            availability,
            integrity,
            confidentiality,
        }
    }

    /// All three components at the same level.
    pub fn uniform(level: SecurityLevel) -> Self {
        Self::new(level, level, level)
    }

    pub fn level_for(&self, component: CiaComponent) -> SecurityLevel {
        match component {
            CiaComponent::Availability => self.availability,
            CiaComponent::Integrity => self.integrity,
            CiaComponent::Confidentiality => self.confidentiality,
        }
    }

    /// Component/level pairs in canonical (A, I, C) order.
    pub fn entries(&self) -> [(CiaComponent, SecurityLevel); 3] {
        [
            (CiaComponent::Availability, self.availability),
            (CiaComponent::Integrity, self.integrity),
            (CiaComponent::Confidentiality, self.confidentiality),
        ]
    }

    /// Weakest component level. Drives business-impact severity.
    pub fn min_level(&self) -> SecurityLevel {
        self.availability
            .min(self.integrity)
            .min(self.confidentiality)
    }

    /// Strongest component level. Drives staffing/expertise requirements.
    pub fn max_level(&self) -> SecurityLevel {
        self.availability
            .max(self.integrity)
            .max(self.confidentiality)
    }
}

impl fmt::Display for SecurityLevelTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A:{} / I:{} / C:{}",
            self.availability, self.integrity, self.confidentiality
        )
    }
}

/// Qualitative risk exposure implied by a security level.
///
/// Inverse of the security scale: no protection is critical exposure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Minimal,
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Minimal => "Minimal",
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }

    /// Badge form used in business-impact details ("Low Risk" .. "Critical Risk").
    pub fn badge(&self) -> String {
        format!("{} Risk", self.label())
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a security level to the risk exposure it leaves behind.
pub fn risk_level_from_security_level(level: SecurityLevel) -> RiskLevel {
    match level {
        SecurityLevel::None => RiskLevel::Critical,
        SecurityLevel::Low => RiskLevel::High,
        SecurityLevel::Moderate => RiskLevel::Medium,
        SecurityLevel::High => RiskLevel::Low,
        SecurityLevel::VeryHigh => RiskLevel::Minimal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_ordering_is_total() {
        for window in SecurityLevel::ALL.windows(2) {
            assert!(window[0] < window[1]);
        }
    }

    #[test]
    fn score_is_monotonic_in_level() {
        for window in SecurityLevel::ALL.windows(2) {
            assert!(window[0].score() < window[1].score());
        }
        assert_eq!(SecurityLevel::None.score(), 0.0);
        assert_eq!(SecurityLevel::VeryHigh.score(), 100.0);
    }

    #[test]
    fn parse_accepts_display_labels() {
        for level in SecurityLevel::ALL {
            assert_eq!(level.label().parse::<SecurityLevel>().unwrap(), level);
        }
        assert_eq!(
            "very-high".parse::<SecurityLevel>().unwrap(),
            SecurityLevel::VeryHigh
        );
        assert!("extreme".parse::<SecurityLevel>().is_err());
    }

    #[test]
    fn triple_min_max() {
        let triple = SecurityLevelTriple::new(
            SecurityLevel::High,
            SecurityLevel::None,
            SecurityLevel::Moderate,
        );
        assert_eq!(triple.min_level(), SecurityLevel::None);
        assert_eq!(triple.max_level(), SecurityLevel::High);
    }

    #[test]
    fn risk_is_inverse_of_security() {
        assert_eq!(
            risk_level_from_security_level(SecurityLevel::None),
            RiskLevel::Critical
        );
        assert_eq!(
            risk_level_from_security_level(SecurityLevel::VeryHigh),
            RiskLevel::Minimal
        );
        for window in SecurityLevel::ALL.windows(2) {
            assert!(
                risk_level_from_security_level(window[0])
                    > risk_level_from_security_level(window[1])
            );
        }
    }

    #[test]
    fn missing_level_defaults_to_none() {
        assert_eq!(SecurityLevel::or_none(None), SecurityLevel::None);
        assert_eq!(
            SecurityLevel::or_none(Some(SecurityLevel::High)),
            SecurityLevel::High
        );
    }
}
