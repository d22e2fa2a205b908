//! Facade composing the calculators into one queryable surface.
//!
//! The presentation layer talks only to [`AssessmentEngine`]; it never
//! reaches into the content repository directly. The engine is stateless
//! apart from the injected provider and is safe to share across threads.

use crate::compliance::{ComplianceEvaluator, ComplianceStatus};
use crate::core::{
    risk_level_from_security_level, CiaComponent, RiskLevel, SecurityLevel, SecurityLevelTriple,
};
use crate::dataset::{
    default_dataset, BusinessImpactDetails, ComponentDetails, ContentProvider, Dataset,
    DatasetError, RoiEstimate,
};
use crate::impact::{BusinessImpactCalculator, ImpactDescription, ImpactLevel};
use crate::implementation::ImplementationAdvisor;
use crate::metrics::{ComponentMetrics, SecurityMetrics, SecurityMetricsCalculator};
use crate::roi::{RoiCalculator, RoiMetrics};
use serde::Serialize;
use std::sync::Arc;

/// Business impact of one component at its selected level, as rendered in
/// an assessment.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentImpact {
    pub component: CiaComponent,
    pub level: SecurityLevel,
    pub description: ImpactDescription,
    pub details: BusinessImpactDetails,
}

/// Everything the presentation layer needs for one triple, computed in a
/// single pass.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub triple: SecurityLevelTriple,
    pub metrics: SecurityMetrics,
    pub impact_level: ImpactLevel,
    /// Risk left by the weakest component.
    pub overall_risk: RiskLevel,
    pub component_impacts: Vec<ComponentImpact>,
    pub implementation_cost: f64,
    /// ROI at the triple's minimum level: realized returns are gated by
    /// the weakest link, like business risk.
    pub roi: RoiMetrics,
    pub compliance: ComplianceStatus,
    pub implementation_time: String,
    pub required_expertise: String,
    pub implementation_plan: String,
}

pub struct AssessmentEngine {
    provider: Arc<dyn ContentProvider>,
    evaluator: ComplianceEvaluator,
    advisor: ImplementationAdvisor,
}

impl AssessmentEngine {
    /// Engine over an injected content provider. The provider is trusted;
    /// use [`from_dataset`](Self::from_dataset) to validate raw data first.
    pub fn new(provider: Arc<dyn ContentProvider>) -> Self {
        Self {
            provider,
            evaluator: ComplianceEvaluator::default(),
            advisor: ImplementationAdvisor::new(),
        }
    }

    /// Validate a dataset and build an engine over it. The only place a
    /// malformed dataset surfaces as a hard failure.
    pub fn from_dataset(dataset: Dataset) -> Result<Self, DatasetError> {
        dataset.validate()?;
        Ok(Self::new(Arc::new(dataset)))
    }

    /// Engine over the built-in content pack.
    pub fn with_default_dataset() -> Self {
        Self::new(Arc::new(default_dataset().clone()))
    }

    /// Replace the framework set, keeping the content provider.
    pub fn with_evaluator(mut self, evaluator: ComplianceEvaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn evaluator(&self) -> &ComplianceEvaluator {
        &self.evaluator
    }

    // --- content repository ---

    pub fn component_details(
        &self,
        component: CiaComponent,
        level: SecurityLevel,
    ) -> Option<&ComponentDetails> {
        self.provider.component_details(component, level)
    }

    /// Ordered recommendation list; empty when the dataset has a gap.
    pub fn recommendations(&self, component: CiaComponent, level: SecurityLevel) -> Vec<String> {
        self.provider
            .component_details(component, level)
            .map(|d| d.recommendations.clone())
            .unwrap_or_default()
    }

    // --- security metrics ---

    pub fn security_metrics(&self, triple: SecurityLevelTriple) -> SecurityMetrics {
        SecurityMetricsCalculator::new(self.provider.as_ref()).security_metrics(triple)
    }

    pub fn component_metrics(
        &self,
        component: CiaComponent,
        level: SecurityLevel,
    ) -> ComponentMetrics {
        SecurityMetricsCalculator::new(self.provider.as_ref()).component_metrics(component, level)
    }

    // --- business impact ---

    pub fn business_impact(
        &self,
        component: CiaComponent,
        level: SecurityLevel,
    ) -> BusinessImpactDetails {
        BusinessImpactCalculator::new(self.provider.as_ref()).business_impact(component, level)
    }

    pub fn business_impact_description(
        &self,
        component: CiaComponent,
        level: SecurityLevel,
    ) -> ImpactDescription {
        BusinessImpactCalculator::new(self.provider.as_ref())
            .business_impact_description(component, level)
    }

    pub fn business_impact_level(&self, triple: SecurityLevelTriple) -> ImpactLevel {
        BusinessImpactCalculator::new(self.provider.as_ref()).business_impact_level(triple)
    }

    // --- ROI ---

    pub fn roi_estimate(&self, level: SecurityLevel) -> RoiEstimate {
        RoiCalculator::new(self.provider.as_ref()).roi_estimate(level)
    }

    pub fn calculate_roi(&self, level: SecurityLevel, implementation_cost: f64) -> RoiMetrics {
        RoiCalculator::new(self.provider.as_ref()).calculate_roi(level, implementation_cost)
    }

    // --- compliance ---

    pub fn compliance_status(&self, triple: SecurityLevelTriple) -> ComplianceStatus {
        self.evaluator.compliance_status(triple)
    }

    pub fn compliant_frameworks(&self, triple: SecurityLevelTriple) -> Vec<String> {
        self.evaluator.compliant_frameworks(triple)
    }

    pub fn framework_required_level(
        &self,
        framework: &str,
        component: CiaComponent,
    ) -> Option<SecurityLevel> {
        self.evaluator.framework_required_level(framework, component)
    }

    // --- implementation advice ---

    pub fn total_implementation_time(&self, triple: SecurityLevelTriple) -> String {
        self.advisor.total_implementation_time(triple)
    }

    pub fn required_expertise(&self, triple: SecurityLevelTriple) -> &'static str {
        self.advisor.required_expertise(triple)
    }

    pub fn implementation_plan(&self, triple: SecurityLevelTriple) -> String {
        self.advisor.implementation_plan(triple)
    }

    // --- risk ---

    pub fn risk_level(&self, level: SecurityLevel) -> RiskLevel {
        risk_level_from_security_level(level)
    }

    /// Full assessment for one triple and an optional implementation cost.
    pub fn assess(&self, triple: SecurityLevelTriple, implementation_cost: f64) -> Assessment {
        let impact = BusinessImpactCalculator::new(self.provider.as_ref());

        let component_impacts = triple
            .entries()
            .iter()
            .map(|&(component, level)| ComponentImpact {
                component,
                level,
                description: impact.business_impact_description(component, level),
                details: impact.business_impact(component, level),
            })
            .collect();

        Assessment {
            triple,
            metrics: self.security_metrics(triple),
            impact_level: self.business_impact_level(triple),
            overall_risk: risk_level_from_security_level(triple.min_level()),
            component_impacts,
            implementation_cost,
            roi: self.calculate_roi(triple.min_level(), implementation_cost),
            compliance: self.compliance_status(triple),
            implementation_time: self.total_implementation_time(triple),
            required_expertise: self.required_expertise(triple).to_string(),
            implementation_plan: self.implementation_plan(triple),
        }
    }
}
