use ciascope::{
    AssessmentEngine, CiaComponent, ImpactLevel, RiskLevel, SecurityLevel, SecurityLevelTriple,
};
use pretty_assertions::assert_eq;

#[test]
fn every_component_level_pair_has_defined_details() {
    let engine = AssessmentEngine::with_default_dataset();
    for component in CiaComponent::ALL {
        for level in SecurityLevel::ALL {
            let details = engine
                .component_details(component, level)
                .unwrap_or_else(|| panic!("missing details for {component} at {level}"));
            assert!(!details.description.trim().is_empty());
            assert!(!details.recommendations.is_empty());
        }
    }
}

#[test]
fn very_high_triple_scores_at_least_any_other() {
    let engine = AssessmentEngine::with_default_dataset();
    let top = engine
        .security_metrics(SecurityLevelTriple::uniform(SecurityLevel::VeryHigh))
        .score;
    for a in SecurityLevel::ALL {
        for i in SecurityLevel::ALL {
            for c in SecurityLevel::ALL {
                let score = engine
                    .security_metrics(SecurityLevelTriple::new(a, i, c))
                    .score;
                assert!(top >= score);
            }
        }
    }
}

#[test]
fn weakest_link_drives_business_impact() {
    let engine = AssessmentEngine::with_default_dataset();
    let lopsided = SecurityLevelTriple::new(
        SecurityLevel::High,
        SecurityLevel::High,
        SecurityLevel::None,
    );
    assert_eq!(
        engine.business_impact_level(lopsided),
        engine.business_impact_level(SecurityLevelTriple::uniform(SecurityLevel::None))
    );
    // Not a blended moderate rating.
    assert_ne!(engine.business_impact_level(lopsided), ImpactLevel::Moderate);
}

#[test]
fn risk_level_example_scenarios() {
    let engine = AssessmentEngine::with_default_dataset();
    assert_eq!(engine.risk_level(SecurityLevel::None), RiskLevel::Critical);
    assert_eq!(engine.risk_level(SecurityLevel::VeryHigh), RiskLevel::Minimal);
}

#[test]
fn roi_example_scenario() {
    let engine = AssessmentEngine::with_default_dataset();
    let roi = engine.calculate_roi(SecurityLevel::Moderate, 10_000.0);
    assert_eq!(roi.value, "$15,000");
    assert_eq!(roi.percentage, "150%");
}

#[test]
fn roi_value_is_zero_for_every_level_at_zero_cost() {
    let engine = AssessmentEngine::with_default_dataset();
    for level in SecurityLevel::ALL {
        assert_eq!(engine.calculate_roi(level, 0.0).value, "$0");
    }
}

#[test]
fn implementation_time_example_scenario() {
    let engine = AssessmentEngine::with_default_dataset();
    assert_eq!(
        engine.total_implementation_time(SecurityLevelTriple::uniform(SecurityLevel::None)),
        "No implementation required"
    );
}

#[test]
fn impact_severity_and_expertise_aggregate_from_opposite_ends() {
    // Risk exposure follows the weakest link; staffing burden follows the
    // strongest requirement. Both on the same lopsided triple.
    let engine = AssessmentEngine::with_default_dataset();
    let lopsided = SecurityLevelTriple::new(
        SecurityLevel::None,
        SecurityLevel::None,
        SecurityLevel::VeryHigh,
    );

    assert_eq!(
        engine.business_impact_level(lopsided),
        engine.business_impact_level(SecurityLevelTriple::uniform(SecurityLevel::None))
    );
    assert_eq!(
        engine.required_expertise(lopsided),
        engine.required_expertise(SecurityLevelTriple::uniform(SecurityLevel::VeryHigh))
    );
}

#[test]
fn full_assessment_carries_every_section() {
    let engine = AssessmentEngine::with_default_dataset();
    let assessment = engine.assess(
        SecurityLevelTriple::new(
            SecurityLevel::Moderate,
            SecurityLevel::High,
            SecurityLevel::Low,
        ),
        25_000.0,
    );

    assert_eq!(assessment.component_impacts.len(), 3);
    assert_eq!(assessment.metrics.components.len(), 3);
    assert!(!assessment.implementation_plan.is_empty());
    assert!(!assessment.required_expertise.is_empty());
    let framework_total = assessment.compliance.compliant.len()
        + assessment.compliance.partially_compliant.len()
        + assessment.compliance.non_compliant.len();
    assert_eq!(framework_total, engine.evaluator().frameworks().len());
}
