//! Business impact: per-category narratives and the weakest-link composite.
//!
//! Aggregation rule worth keeping straight: business-risk severity follows
//! the *lowest* level in the triple (one weak component dominates real
//! exposure), while staffing burden in the implementation advisor follows
//! the *highest*. The asymmetry is an intentional business rule; do not
//! unify the two.

use crate::core::{CiaComponent, SecurityLevel, SecurityLevelTriple};
use crate::dataset::{BusinessImpactDetails, ContentProvider};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative composite impact rating for a triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ImpactLevel {
    Minimal,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl ImpactLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ImpactLevel::Minimal => "Minimal",
            ImpactLevel::Low => "Low",
            ImpactLevel::Moderate => "Moderate",
            ImpactLevel::High => "High",
            ImpactLevel::VeryHigh => "Very High",
        }
    }

    pub fn from_level(level: SecurityLevel) -> ImpactLevel {
        match level {
            SecurityLevel::None => ImpactLevel::Minimal,
            SecurityLevel::Low => ImpactLevel::Low,
            SecurityLevel::Moderate => ImpactLevel::Moderate,
            SecurityLevel::High => ImpactLevel::High,
            SecurityLevel::VeryHigh => ImpactLevel::VeryHigh,
        }
    }
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which tier of the ordered fallback produced an impact description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DescriptionSource {
    /// Structured `business_impact_details.summary` from the dataset.
    Summary,
    /// The raw per-component business-impact narrative.
    ComponentNarrative,
    /// Synthesized fallback when the dataset has neither.
    GenericTemplate,
}

/// Impact description with provenance, so each fallback tier is testable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactDescription {
    pub text: String,
    pub source: DescriptionSource,
}

pub struct BusinessImpactCalculator<'a> {
    provider: &'a dyn ContentProvider,
}

impl<'a> BusinessImpactCalculator<'a> {
    pub fn new(provider: &'a dyn ContentProvider) -> Self {
        Self { provider }
    }

    /// Categorized impact details for one component at one level.
    ///
    /// Always returns a value: when the dataset carries no structured
    /// details, the summary is synthesized through the same fallback chain
    /// as [`business_impact_description`](Self::business_impact_description)
    /// and the per-category fields stay empty.
    pub fn business_impact(
        &self,
        component: CiaComponent,
        level: SecurityLevel,
    ) -> BusinessImpactDetails {
        if let Some(details) = self
            .provider
            .component_details(component, level)
            .and_then(|d| d.business_impact_details.as_ref())
        {
            if !details.summary.trim().is_empty() {
                return details.clone();
            }
            let mut details = details.clone();
            details.summary = self.business_impact_description(component, level).text;
            return details;
        }

        BusinessImpactDetails {
            summary: self.business_impact_description(component, level).text,
            ..BusinessImpactDetails::default()
        }
    }

    /// Three-tier ordered fallback: structured summary, then the raw
    /// component narrative, then a generic template. Never fails.
    pub fn business_impact_description(
        &self,
        component: CiaComponent,
        level: SecurityLevel,
    ) -> ImpactDescription {
        let details = self.provider.component_details(component, level);

        if let Some(summary) = details
            .and_then(|d| d.business_impact_details.as_ref())
            .map(|b| b.summary.trim())
            .filter(|s| !s.is_empty())
        {
            return ImpactDescription {
                text: summary.to_string(),
                source: DescriptionSource::Summary,
            };
        }

        if let Some(narrative) = details
            .map(|d| d.business_impact.trim())
            .filter(|s| !s.is_empty())
        {
            return ImpactDescription {
                text: narrative.to_string(),
                source: DescriptionSource::ComponentNarrative,
            };
        }

        log::warn!("no impact narrative for {component} at {level}, using generic template");
        ImpactDescription {
            text: format!(
                "{} controls at the {} level shape the organization's exposure to \
                 availability, integrity and confidentiality incidents.",
                component, level
            ),
            source: DescriptionSource::GenericTemplate,
        }
    }

    /// Weakest-link composite: the lowest level in the triple determines
    /// the rating, not an average.
    pub fn business_impact_level(&self, triple: SecurityLevelTriple) -> ImpactLevel {
        ImpactLevel::from_level(triple.min_level())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{default_dataset, ComponentDetails, Dataset};

    fn calculator() -> BusinessImpactCalculator<'static> {
        BusinessImpactCalculator::new(default_dataset())
    }

    #[test]
    fn weakest_link_dominates() {
        let calc = calculator();
        let lopsided = SecurityLevelTriple::new(
            SecurityLevel::High,
            SecurityLevel::High,
            SecurityLevel::None,
        );
        let floor = SecurityLevelTriple::uniform(SecurityLevel::None);
        assert_eq!(
            calc.business_impact_level(lopsided),
            calc.business_impact_level(floor)
        );
        assert_eq!(calc.business_impact_level(lopsided), ImpactLevel::Minimal);
    }

    #[test]
    fn impact_level_is_permutation_symmetric() {
        let calc = calculator();
        let levels = [
            SecurityLevel::Low,
            SecurityLevel::High,
            SecurityLevel::Moderate,
        ];
        let [a, b, c] = levels;
        let permutations = [
            SecurityLevelTriple::new(a, b, c),
            SecurityLevelTriple::new(a, c, b),
            SecurityLevelTriple::new(b, a, c),
            SecurityLevelTriple::new(b, c, a),
            SecurityLevelTriple::new(c, a, b),
            SecurityLevelTriple::new(c, b, a),
        ];
        let first = calc.business_impact_level(permutations[0]);
        for triple in permutations {
            assert_eq!(calc.business_impact_level(triple), first);
        }
    }

    #[test]
    fn description_prefers_structured_summary() {
        let calc = calculator();
        let description = calc
            .business_impact_description(CiaComponent::Availability, SecurityLevel::Moderate);
        assert_eq!(description.source, DescriptionSource::Summary);
        assert!(!description.text.is_empty());
    }

    fn dataset_with(
        mutate: impl Fn(&mut ComponentDetails),
    ) -> Dataset {
        let mut dataset = default_dataset().clone();
        for entry in &mut dataset.components {
            mutate(&mut entry.details);
        }
        dataset
    }

    #[test]
    fn description_falls_back_to_component_narrative() {
        let dataset = dataset_with(|d| d.business_impact_details = None);
        let calc = BusinessImpactCalculator::new(&dataset);
        let description =
            calc.business_impact_description(CiaComponent::Integrity, SecurityLevel::Low);
        assert_eq!(description.source, DescriptionSource::ComponentNarrative);
    }

    #[test]
    fn description_falls_back_to_generic_template() {
        let dataset = dataset_with(|d| {
            d.business_impact_details = None;
            d.business_impact = String::new();
        });
        let calc = BusinessImpactCalculator::new(&dataset);
        let description =
            calc.business_impact_description(CiaComponent::Confidentiality, SecurityLevel::High);
        assert_eq!(description.source, DescriptionSource::GenericTemplate);
        assert!(description.text.contains("Confidentiality"));
    }

    #[test]
    fn business_impact_always_has_a_summary() {
        let dataset = dataset_with(|d| d.business_impact_details = None);
        let calc = BusinessImpactCalculator::new(&dataset);
        for component in CiaComponent::ALL {
            for level in SecurityLevel::ALL {
                let impact = calc.business_impact(component, level);
                assert!(!impact.summary.trim().is_empty());
            }
        }
    }
}
