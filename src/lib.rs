// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod compliance;
pub mod core;
pub mod dataset;
pub mod engine;
pub mod impact;
pub mod implementation;
pub mod metrics;
pub mod report;
pub mod roi;

// Re-export commonly used types
pub use crate::core::{
    risk_level_from_security_level, CiaComponent, RiskLevel, SecurityLevel, SecurityLevelTriple,
};

pub use crate::dataset::{
    default_dataset, BusinessImpactDetail, BusinessImpactDetails, ComponentDetails,
    ContentProvider, Dataset, DatasetError, RoiEstimate,
};

pub use crate::compliance::{
    default_frameworks, ComplianceEvaluator, ComplianceFramework, ComplianceStatus,
    FrameworkStatus, RemediationStep,
};

pub use crate::engine::{Assessment, AssessmentEngine, ComponentImpact};
pub use crate::impact::{BusinessImpactCalculator, DescriptionSource, ImpactDescription, ImpactLevel};
pub use crate::implementation::ImplementationAdvisor;
pub use crate::metrics::{
    ComponentMetrics, OperationalMetrics, SecurityMetrics, SecurityMetricsCalculator,
};
pub use crate::roi::{format_currency, RoiCalculator, RoiMetrics};
