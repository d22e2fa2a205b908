//! Compliance: framework threshold checks and remediation ordering.
//!
//! Framework status is a pure classification with three terminal states;
//! nothing is tracked over time, every query recomputes from the triple.

use crate::core::{CiaComponent, SecurityLevel, SecurityLevelTriple};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named external standard with per-component minimum levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceFramework {
    pub name: String,
    pub description: String,
    /// Minimum level required per component, reusing the triple shape.
    pub requirements: SecurityLevelTriple,
}

impl ComplianceFramework {
    pub fn required_level(&self, component: CiaComponent) -> SecurityLevel {
        self.requirements.level_for(component)
    }

    /// How many of the three component requirements the triple meets.
    fn met_count(&self, triple: &SecurityLevelTriple) -> usize {
        CiaComponent::ALL
            .iter()
            .filter(|&&c| triple.level_for(c) >= self.required_level(c))
            .count()
    }

    pub fn status_for(&self, triple: &SecurityLevelTriple) -> FrameworkStatus {
        match self.met_count(triple) {
            3 => FrameworkStatus::Compliant,
            0 => FrameworkStatus::NonCompliant,
            _ => FrameworkStatus::PartiallyCompliant,
        }
    }
}

/// Terminal classification of one framework against one triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameworkStatus {
    Compliant,
    PartiallyCompliant,
    NonCompliant,
}

impl FrameworkStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FrameworkStatus::Compliant => "Compliant",
            FrameworkStatus::PartiallyCompliant => "Partially Compliant",
            FrameworkStatus::NonCompliant => "Non-Compliant",
        }
    }
}

impl fmt::Display for FrameworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One recommended upgrade on the path toward the next compliance tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemediationStep {
    pub component: CiaComponent,
    pub current_level: SecurityLevel,
    pub target_level: SecurityLevel,
    /// Frameworks whose requirement on this component the step satisfies.
    pub frameworks: Vec<String>,
    pub description: String,
}

/// Partition of the framework set for a given triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceStatus {
    pub compliant: Vec<String>,
    pub partially_compliant: Vec<String>,
    pub non_compliant: Vec<String>,
    /// Ordered weakest component first.
    pub remediation_steps: Vec<RemediationStep>,
}

pub struct ComplianceEvaluator {
    frameworks: Vec<ComplianceFramework>,
}

impl Default for ComplianceEvaluator {
    fn default() -> Self {
        Self::new(default_frameworks())
    }
}

impl ComplianceEvaluator {
    pub fn new(frameworks: Vec<ComplianceFramework>) -> Self {
        Self { frameworks }
    }

    pub fn frameworks(&self) -> &[ComplianceFramework] {
        &self.frameworks
    }

    pub fn framework(&self, name: &str) -> Option<&ComplianceFramework> {
        self.frameworks
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Required level of one framework for one component.
    pub fn framework_required_level(
        &self,
        name: &str,
        component: CiaComponent,
    ) -> Option<SecurityLevel> {
        self.framework(name).map(|f| f.required_level(component))
    }

    /// Names of frameworks the triple fully satisfies.
    pub fn compliant_frameworks(&self, triple: SecurityLevelTriple) -> Vec<String> {
        self.frameworks
            .iter()
            .filter(|f| f.status_for(&triple) == FrameworkStatus::Compliant)
            .map(|f| f.name.clone())
            .collect()
    }

    /// Classify every framework and derive remediation steps.
    pub fn compliance_status(&self, triple: SecurityLevelTriple) -> ComplianceStatus {
        let mut compliant = Vec::new();
        let mut partially_compliant = Vec::new();
        let mut non_compliant = Vec::new();

        for framework in &self.frameworks {
            let bucket = match framework.status_for(&triple) {
                FrameworkStatus::Compliant => &mut compliant,
                FrameworkStatus::PartiallyCompliant => &mut partially_compliant,
                FrameworkStatus::NonCompliant => &mut non_compliant,
            };
            bucket.push(framework.name.clone());
        }

        ComplianceStatus {
            compliant,
            partially_compliant,
            non_compliant,
            remediation_steps: self.remediation_steps(triple),
        }
    }

    /// Upgrade recommendations, weakest component first.
    ///
    /// For each component (sorted ascending by current level, canonical
    /// A/I/C order breaking ties) the target is the *nearest* unmet
    /// framework requirement above the current level, so each step reaches
    /// the next compliance tier rather than jumping straight to the top.
    pub fn remediation_steps(&self, triple: SecurityLevelTriple) -> Vec<RemediationStep> {
        let mut components = triple.entries();
        components.sort_by_key(|&(_, level)| level);

        let mut steps = Vec::new();
        for (component, current_level) in components {
            let mut unmet: Vec<&ComplianceFramework> = self
                .frameworks
                .iter()
                .filter(|f| f.required_level(component) > current_level)
                .collect();
            if unmet.is_empty() {
                continue;
            }

            unmet.sort_by_key(|f| f.required_level(component));
            let target_level = unmet[0].required_level(component);
            let frameworks: Vec<String> = unmet
                .iter()
                .filter(|f| f.required_level(component) == target_level)
                .map(|f| f.name.clone())
                .collect();

            steps.push(RemediationStep {
                component,
                current_level,
                target_level,
                description: format!(
                    "Raise {} from {} to {} to meet {}",
                    component,
                    current_level,
                    target_level,
                    frameworks.join(", ")
                ),
                frameworks,
            });
        }
        steps
    }
}

/// Built-in framework set: a baseline, a management-system standard, a
/// payment-data standard, a health-data standard and a federal-systems
/// standard.
pub fn default_frameworks() -> Vec<ComplianceFramework> {
    let framework = |name: &str, description: &str, a, i, c| ComplianceFramework {
        name: name.to_string(),
        description: description.to_string(),
        requirements: SecurityLevelTriple::new(a, i, c),
    };

    use SecurityLevel::*;
    vec![
        framework(
            "CIS Controls",
            "Baseline cyber hygiene controls applicable to any organization",
            Low,
            Low,
            Low,
        ),
        framework(
            "ISO 27001",
            "Information security management system certification",
            Moderate,
            Moderate,
            Moderate,
        ),
        framework(
            "HIPAA",
            "US health-data privacy and security requirements",
            Moderate,
            High,
            High,
        ),
        framework(
            "PCI DSS",
            "Payment card data protection requirements",
            Moderate,
            High,
            VeryHigh,
        ),
        framework(
            "NIST 800-53",
            "Security controls for US federal information systems (high baseline)",
            High,
            High,
            High,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluator() -> ComplianceEvaluator {
        ComplianceEvaluator::default()
    }

    #[test]
    fn all_very_high_is_compliant_with_every_framework() {
        let eval = evaluator();
        let status = eval.compliance_status(SecurityLevelTriple::uniform(SecurityLevel::VeryHigh));
        assert_eq!(status.compliant.len(), eval.frameworks().len());
        assert!(status.partially_compliant.is_empty());
        assert!(status.non_compliant.is_empty());
        assert!(status.remediation_steps.is_empty());
    }

    #[test]
    fn all_none_is_non_compliant_with_every_framework() {
        let eval = evaluator();
        let status = eval.compliance_status(SecurityLevelTriple::uniform(SecurityLevel::None));
        assert_eq!(status.non_compliant.len(), eval.frameworks().len());
        assert!(status.compliant.is_empty());
    }

    #[test]
    fn mixed_triple_is_partially_compliant() {
        let eval = evaluator();
        // Meets the ISO 27001 availability requirement only.
        let triple = SecurityLevelTriple::new(
            SecurityLevel::Moderate,
            SecurityLevel::None,
            SecurityLevel::None,
        );
        let iso = eval.framework("ISO 27001").unwrap();
        assert_eq!(iso.status_for(&triple), FrameworkStatus::PartiallyCompliant);
    }

    #[test]
    fn remediation_orders_weakest_component_first() {
        let eval = evaluator();
        let triple = SecurityLevelTriple::new(
            SecurityLevel::High,
            SecurityLevel::None,
            SecurityLevel::Low,
        );
        let steps = eval.remediation_steps(triple);
        let levels: Vec<SecurityLevel> = steps.iter().map(|s| s.current_level).collect();
        let mut sorted = levels.clone();
        sorted.sort();
        assert_eq!(levels, sorted);
        assert_eq!(steps[0].component, CiaComponent::Integrity);
    }

    #[test]
    fn remediation_targets_the_next_tier_not_the_top() {
        let eval = evaluator();
        let triple = SecurityLevelTriple::uniform(SecurityLevel::None);
        let steps = eval.remediation_steps(triple);
        // Nearest requirement above None is the CIS Controls baseline.
        for step in steps {
            assert_eq!(step.target_level, SecurityLevel::Low);
            assert!(step.frameworks.contains(&"CIS Controls".to_string()));
        }
    }

    #[test]
    fn required_level_lookup() {
        let eval = evaluator();
        assert_eq!(
            eval.framework_required_level("PCI DSS", CiaComponent::Confidentiality),
            Some(SecurityLevel::VeryHigh)
        );
        assert_eq!(
            eval.framework_required_level("pci dss", CiaComponent::Availability),
            Some(SecurityLevel::Moderate)
        );
        assert_eq!(
            eval.framework_required_level("SOX", CiaComponent::Integrity),
            None
        );
    }

    #[test]
    fn raising_a_level_never_removes_compliance() {
        let eval = evaluator();
        for a in SecurityLevel::ALL {
            for i in SecurityLevel::ALL {
                for c in SecurityLevel::ALL {
                    let base = eval
                        .compliant_frameworks(SecurityLevelTriple::new(a, i, c))
                        .len();
                    if let Some(up) = c.next_up() {
                        let raised = eval
                            .compliant_frameworks(SecurityLevelTriple::new(a, i, up))
                            .len();
                        assert!(raised >= base);
                    }
                }
            }
        }
    }
}
