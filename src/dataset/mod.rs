//! Content repository for the assessment engine.
//!
//! A `Dataset` is the static, read-only narrative and cost data keyed by
//! (component, level). It is validated once when an engine is constructed;
//! after that every calculator treats it as total. Alternate datasets can be
//! injected through the [`ContentProvider`] trait or loaded from JSON.

pub mod default_data;

use crate::core::{CiaComponent, RiskLevel, SecurityLevel};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub use default_data::default_dataset;

/// Per (component, level) record: narrative text, cost figures, theming and
/// recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDetails {
    pub description: String,
    pub technical: String,
    pub business_impact: String,
    /// One-time implementation cost, in percent of the annual IT budget.
    pub capex: f64,
    /// Recurring operational cost, same unit as `capex`.
    pub opex: f64,
    pub bg_color: String,
    pub text_color: String,
    pub recommendations: Vec<String>,
    // Availability-only operational targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rto: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mttr: Option<String>,
    // Integrity-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_method: Option<String>,
    // Confidentiality-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protection_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_impact_details: Option<BusinessImpactDetails>,
}

impl ComponentDetails {
    /// Sentinel returned for lookups the dataset cannot answer.
    ///
    /// Every field carries an explanatory placeholder so the presentation
    /// layer degrades gracefully instead of panicking on a gap.
    pub fn unavailable() -> Self {
        ComponentDetails {
            description: "Details not available for this selection".to_string(),
            technical: "No technical guidance is defined for this selection".to_string(),
            business_impact: "No business impact data is defined for this selection".to_string(),
            capex: 0.0,
            opex: 0.0,
            bg_color: "#808080".to_string(),
            text_color: "#ffffff".to_string(),
            recommendations: vec!["Review the security level selection".to_string()],
            uptime: None,
            rto: None,
            rpo: None,
            mttr: None,
            validation_method: None,
            protection_method: None,
            classification: None,
            business_impact_details: None,
        }
    }
}

/// One impact category: narrative plus qualitative risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessImpactDetail {
    pub description: String,
    pub risk_level: RiskLevel,
}

/// Up to five categorized impact details plus a summary, for one
/// (component, level) pair. Categories a dataset has nothing to say about
/// stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessImpactDetails {
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial: Option<BusinessImpactDetail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operational: Option<BusinessImpactDetail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reputational: Option<BusinessImpactDetail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regulatory: Option<BusinessImpactDetail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategic: Option<BusinessImpactDetail>,
}

/// Per-level ROI figures. `return_rate` is a display string with a leading
/// integer percentage ("150%"), parsed by the ROI calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiEstimate {
    pub return_rate: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentEntry {
    pub component: CiaComponent,
    pub level: SecurityLevel,
    #[serde(flatten)]
    pub details: ComponentDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiEntry {
    pub level: SecurityLevel,
    #[serde(flatten)]
    pub estimate: RoiEstimate,
}

/// Validation failures for an injected dataset. These are programmer/data
/// errors and surface as hard failures at engine construction; calculators
/// never raise them at query time.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("missing component details for {component} at level {level}")]
    MissingEntry {
        component: CiaComponent,
        level: SecurityLevel,
    },
    #[error("duplicate component details for {component} at level {level}")]
    DuplicateEntry {
        component: CiaComponent,
        level: SecurityLevel,
    },
    #[error("empty description for {component} at level {level}")]
    EmptyDescription {
        component: CiaComponent,
        level: SecurityLevel,
    },
    #[error("empty recommendation list for {component} at level {level}")]
    EmptyRecommendations {
        component: CiaComponent,
        level: SecurityLevel,
    },
    #[error("missing ROI estimate for level {level}")]
    MissingRoiEstimate { level: SecurityLevel },
    #[error("return rate {rate:?} for level {level} has no leading integer")]
    BadReturnRate { level: SecurityLevel, rate: String },
    #[error("failed to read dataset file")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset JSON")]
    Json(#[from] serde_json::Error),
}

/// Injectable data provider the engine is constructed over.
///
/// Decouples the calculators from any single hard-coded dataset; tests and
/// alternate content packs implement this instead of touching calculator
/// logic.
pub trait ContentProvider: Send + Sync {
    fn component_details(
        &self,
        component: CiaComponent,
        level: SecurityLevel,
    ) -> Option<&ComponentDetails>;

    fn roi_estimate(&self, level: SecurityLevel) -> Option<&RoiEstimate>;
}

/// The static dataset backing the default engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub components: Vec<ComponentEntry>,
    pub roi_estimates: Vec<RoiEntry>,
}

impl Dataset {
    /// Load and validate a dataset from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Dataset, DatasetError> {
        let raw = fs::read_to_string(path)?;
        let dataset: Dataset = serde_json::from_str(&raw)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Check the 3x5 coverage invariant and per-entry integrity.
    ///
    /// Every (component, level) pair must be defined exactly once with a
    /// non-empty description and recommendation list, and every level needs
    /// an ROI estimate with a parseable return rate.
    pub fn validate(&self) -> Result<(), DatasetError> {
        for component in CiaComponent::ALL {
            for level in SecurityLevel::ALL {
                let mut matches = self
                    .components
                    .iter()
                    .filter(|e| e.component == component && e.level == level);

                let entry = matches
                    .next()
                    .ok_or(DatasetError::MissingEntry { component, level })?;
                if matches.next().is_some() {
                    return Err(DatasetError::DuplicateEntry { component, level });
                }
                if entry.details.description.trim().is_empty() {
                    return Err(DatasetError::EmptyDescription { component, level });
                }
                if entry.details.recommendations.is_empty() {
                    return Err(DatasetError::EmptyRecommendations { component, level });
                }
            }
        }

        for level in SecurityLevel::ALL {
            let estimate = self
                .roi_estimates
                .iter()
                .find(|e| e.level == level)
                .map(|e| &e.estimate)
                .ok_or(DatasetError::MissingRoiEstimate { level })?;
            if parse_return_rate(&estimate.return_rate).is_none() {
                return Err(DatasetError::BadReturnRate {
                    level,
                    rate: estimate.return_rate.clone(),
                });
            }
        }

        Ok(())
    }
}

impl ContentProvider for Dataset {
    fn component_details(
        &self,
        component: CiaComponent,
        level: SecurityLevel,
    ) -> Option<&ComponentDetails> {
        let found = self
            .components
            .iter()
            .find(|e| e.component == component && e.level == level)
            .map(|e| &e.details);
        if found.is_none() {
            log::warn!("no component details for {component} at level {level}");
        }
        found
    }

    fn roi_estimate(&self, level: SecurityLevel) -> Option<&RoiEstimate> {
        self.roi_estimates
            .iter()
            .find(|e| e.level == level)
            .map(|e| &e.estimate)
    }
}

/// Leading-integer parse of a return-rate string: "150%" -> 150.
///
/// Mirrors lenient percent parsing: anything after the digits is ignored,
/// a string without a leading integer is `None`.
pub fn parse_return_rate(rate: &str) -> Option<u32> {
    let digits: String = rate
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dataset_passes_validation() {
        default_dataset().validate().unwrap();
    }

    #[test]
    fn validation_catches_missing_entry() {
        let mut dataset = default_dataset().clone();
        dataset
            .components
            .retain(|e| !(e.component == CiaComponent::Integrity && e.level == SecurityLevel::Low));
        assert!(matches!(
            dataset.validate(),
            Err(DatasetError::MissingEntry {
                component: CiaComponent::Integrity,
                level: SecurityLevel::Low,
            })
        ));
    }

    #[test]
    fn validation_catches_empty_recommendations() {
        let mut dataset = default_dataset().clone();
        dataset.components[0].details.recommendations.clear();
        assert!(matches!(
            dataset.validate(),
            Err(DatasetError::EmptyRecommendations { .. })
        ));
    }

    #[test]
    fn validation_catches_bad_return_rate() {
        let mut dataset = default_dataset().clone();
        dataset.roi_estimates[2].estimate.return_rate = "about half".to_string();
        assert!(matches!(
            dataset.validate(),
            Err(DatasetError::BadReturnRate { .. })
        ));
    }

    #[test]
    fn return_rate_parsing_is_lenient_about_suffixes() {
        assert_eq!(parse_return_rate("150%"), Some(150));
        assert_eq!(parse_return_rate(" 0% "), Some(0));
        assert_eq!(parse_return_rate("500% (estimated)"), Some(500));
        assert_eq!(parse_return_rate("n/a"), None);
        assert_eq!(parse_return_rate(""), None);
    }

    #[test]
    fn sentinel_record_is_fully_populated() {
        let sentinel = ComponentDetails::unavailable();
        assert!(!sentinel.description.is_empty());
        assert!(!sentinel.technical.is_empty());
        assert!(!sentinel.business_impact.is_empty());
        assert!(!sentinel.recommendations.is_empty());
    }

    #[test]
    fn dataset_round_trips_through_json() {
        let dataset = default_dataset();
        let json = serde_json::to_string(dataset).unwrap();
        let back: Dataset = serde_json::from_str(&json).unwrap();
        back.validate().unwrap();
        assert_eq!(back.components.len(), dataset.components.len());
    }
}
