//! Security metrics: numeric scoring, operational targets and cost totals.

use crate::core::{risk_level_from_security_level, CiaComponent, RiskLevel, SecurityLevel, SecurityLevelTriple};
use crate::dataset::ContentProvider;
use serde::Serialize;

/// Operational metrics are component specific: availability carries
/// recovery targets, integrity the validation method, confidentiality the
/// protection method and classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum OperationalMetrics {
    Availability {
        uptime: Option<String>,
        rto: Option<String>,
        rpo: Option<String>,
        mttr: Option<String>,
    },
    Integrity {
        validation_method: Option<String>,
    },
    Confidentiality {
        protection_method: Option<String>,
        classification: Option<String>,
    },
}

/// Metrics for one component at one level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentMetrics {
    pub component: CiaComponent,
    pub level: SecurityLevel,
    /// Level magnitude on the 0..100 scale.
    pub score: f64,
    pub risk: RiskLevel,
    pub capex: f64,
    pub opex: f64,
    pub operational: OperationalMetrics,
}

/// Aggregate metrics for a full triple.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecurityMetrics {
    pub triple: SecurityLevelTriple,
    /// Arithmetic mean of the three level magnitudes, in [0, 100].
    pub score: f64,
    /// Sum of one-time costs across the three components.
    pub total_capex: f64,
    /// Sum of recurring costs across the three components.
    pub total_opex: f64,
    pub components: Vec<ComponentMetrics>,
}

pub struct SecurityMetricsCalculator<'a> {
    provider: &'a dyn ContentProvider,
}

impl<'a> SecurityMetricsCalculator<'a> {
    pub fn new(provider: &'a dyn ContentProvider) -> Self {
        Self { provider }
    }

    /// Metrics for a single component. Total function: a dataset gap
    /// contributes zero cost and empty operational targets.
    pub fn component_metrics(
        &self,
        component: CiaComponent,
        level: SecurityLevel,
    ) -> ComponentMetrics {
        let details = self.provider.component_details(component, level);

        let (capex, opex) = details.map(|d| (d.capex, d.opex)).unwrap_or((0.0, 0.0));

        let operational = match component {
            CiaComponent::Availability => OperationalMetrics::Availability {
                uptime: details.and_then(|d| d.uptime.clone()),
                rto: details.and_then(|d| d.rto.clone()),
                rpo: details.and_then(|d| d.rpo.clone()),
                mttr: details.and_then(|d| d.mttr.clone()),
            },
            CiaComponent::Integrity => OperationalMetrics::Integrity {
                validation_method: details.and_then(|d| d.validation_method.clone()),
            },
            CiaComponent::Confidentiality => OperationalMetrics::Confidentiality {
                protection_method: details.and_then(|d| d.protection_method.clone()),
                classification: details.and_then(|d| d.classification.clone()),
            },
        };

        ComponentMetrics {
            component,
            level,
            score: level.score(),
            risk: risk_level_from_security_level(level),
            capex,
            opex,
            operational,
        }
    }

    /// Aggregate metrics for a triple.
    ///
    /// The score is the arithmetic mean of the three level magnitudes, so
    /// raising any component can only raise it. Costs are strictly additive
    /// across the components at their respective levels.
    pub fn security_metrics(&self, triple: SecurityLevelTriple) -> SecurityMetrics {
        let components: Vec<ComponentMetrics> = triple
            .entries()
            .iter()
            .map(|&(component, level)| self.component_metrics(component, level))
            .collect();

        let score =
            components.iter().map(|m| m.score).sum::<f64>() / CiaComponent::ALL.len() as f64;
        let total_capex = components.iter().map(|m| m.capex).sum();
        let total_opex = components.iter().map(|m| m.opex).sum();

        SecurityMetrics {
            triple,
            score,
            total_capex,
            total_opex,
            components,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::default_dataset;

    fn calculator() -> SecurityMetricsCalculator<'static> {
        SecurityMetricsCalculator::new(default_dataset())
    }

    #[test]
    fn score_bounds() {
        let calc = calculator();
        let min = calc.security_metrics(SecurityLevelTriple::uniform(SecurityLevel::None));
        let max = calc.security_metrics(SecurityLevelTriple::uniform(SecurityLevel::VeryHigh));
        assert_eq!(min.score, 0.0);
        assert_eq!(max.score, 100.0);
    }

    #[test]
    fn raising_one_component_never_lowers_the_score() {
        let calc = calculator();
        for a in SecurityLevel::ALL {
            for i in SecurityLevel::ALL {
                for c in SecurityLevel::ALL {
                    let base = calc
                        .security_metrics(SecurityLevelTriple::new(a, i, c))
                        .score;
                    if let Some(up) = a.next_up() {
                        let raised = calc
                            .security_metrics(SecurityLevelTriple::new(up, i, c))
                            .score;
                        assert!(raised >= base);
                    }
                }
            }
        }
    }

    #[test]
    fn costs_are_additive() {
        let calc = calculator();
        let triple = SecurityLevelTriple::new(
            SecurityLevel::High,
            SecurityLevel::Moderate,
            SecurityLevel::Low,
        );
        let metrics = calc.security_metrics(triple);
        let capex_sum: f64 = triple
            .entries()
            .iter()
            .map(|&(component, level)| calc.component_metrics(component, level).capex)
            .sum();
        assert_eq!(metrics.total_capex, capex_sum);
    }

    #[test]
    fn availability_metrics_expose_recovery_targets() {
        let calc = calculator();
        let metrics =
            calc.component_metrics(CiaComponent::Availability, SecurityLevel::High);
        match metrics.operational {
            OperationalMetrics::Availability { ref uptime, ref rto, .. } => {
                assert_eq!(uptime.as_deref(), Some("99.9%"));
                assert!(rto.is_some());
            }
            ref other => panic!("wrong operational variant: {other:?}"),
        }
    }

    #[test]
    fn confidentiality_metrics_expose_protection_method() {
        let calc = calculator();
        let metrics =
            calc.component_metrics(CiaComponent::Confidentiality, SecurityLevel::Moderate);
        match metrics.operational {
            OperationalMetrics::Confidentiality {
                ref protection_method,
                ref classification,
            } => {
                assert!(protection_method.is_some());
                assert_eq!(classification.as_deref(), Some("Confidential"));
            }
            ref other => panic!("wrong operational variant: {other:?}"),
        }
    }
}
