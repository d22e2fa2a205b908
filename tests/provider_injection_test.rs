//! The engine is constructed over an injectable provider; calculators must
//! work against any implementation, not just the built-in dataset.

use ciascope::{
    AssessmentEngine, CiaComponent, ComponentDetails, ContentProvider, DescriptionSource,
    RoiEstimate, SecurityLevel, SecurityLevelTriple,
};
use std::sync::Arc;

/// Minimal test double: one flat record for every pair, one flat ROI rate.
struct FlatProvider {
    details: ComponentDetails,
    estimate: RoiEstimate,
}

impl FlatProvider {
    fn new() -> Self {
        let mut details = ComponentDetails::unavailable();
        details.description = "flat test record".to_string();
        details.business_impact = "flat business impact".to_string();
        details.business_impact_details = None;
        details.capex = 10.0;
        details.opex = 20.0;
        FlatProvider {
            details,
            estimate: RoiEstimate {
                return_rate: "40%".to_string(),
                description: "flat return".to_string(),
            },
        }
    }
}

impl ContentProvider for FlatProvider {
    fn component_details(
        &self,
        _component: CiaComponent,
        _level: SecurityLevel,
    ) -> Option<&ComponentDetails> {
        Some(&self.details)
    }

    fn roi_estimate(&self, _level: SecurityLevel) -> Option<&RoiEstimate> {
        Some(&self.estimate)
    }
}

/// Provider with no content at all: every calculator must still answer.
struct EmptyProvider;

impl ContentProvider for EmptyProvider {
    fn component_details(
        &self,
        _component: CiaComponent,
        _level: SecurityLevel,
    ) -> Option<&ComponentDetails> {
        None
    }

    fn roi_estimate(&self, _level: SecurityLevel) -> Option<&RoiEstimate> {
        None
    }
}

#[test]
fn engine_uses_the_injected_provider() {
    let engine = AssessmentEngine::new(Arc::new(FlatProvider::new()));
    let triple = SecurityLevelTriple::uniform(SecurityLevel::Moderate);

    let metrics = engine.security_metrics(triple);
    assert_eq!(metrics.total_capex, 30.0);
    assert_eq!(metrics.total_opex, 60.0);

    let roi = engine.calculate_roi(SecurityLevel::High, 1_000.0);
    assert_eq!(roi.value, "$400");
    assert_eq!(roi.percentage, "40%");

    // No structured summary in the flat record: second fallback tier.
    let description =
        engine.business_impact_description(CiaComponent::Integrity, SecurityLevel::Low);
    assert_eq!(description.source, DescriptionSource::ComponentNarrative);
    assert_eq!(description.text, "flat business impact");
}

#[test]
fn empty_provider_degrades_without_panicking() {
    let engine = AssessmentEngine::new(Arc::new(EmptyProvider));
    let triple = SecurityLevelTriple::uniform(SecurityLevel::High);

    assert!(engine
        .component_details(CiaComponent::Availability, SecurityLevel::High)
        .is_none());
    assert!(engine
        .recommendations(CiaComponent::Availability, SecurityLevel::High)
        .is_empty());

    // Score comes from the levels, costs degrade to zero.
    let metrics = engine.security_metrics(triple);
    assert_eq!(metrics.score, 75.0);
    assert_eq!(metrics.total_capex, 0.0);

    // ROI degrades to the zero-return estimate.
    let roi = engine.calculate_roi(SecurityLevel::High, 1_000.0);
    assert_eq!(roi.value, "$0");
    assert_eq!(roi.percentage, "0%");

    // Impact description bottoms out in the generic template.
    let description =
        engine.business_impact_description(CiaComponent::Confidentiality, SecurityLevel::High);
    assert_eq!(description.source, DescriptionSource::GenericTemplate);

    // A full assessment still renders end to end.
    let assessment = engine.assess(triple, 1_000.0);
    assert_eq!(assessment.component_impacts.len(), 3);
}
