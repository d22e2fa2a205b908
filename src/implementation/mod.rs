//! Implementation advisor: duration, staffing and a phased rollout plan.
//!
//! Staffing follows the *maximum* level in the triple: the hardest
//! component dictates who has to be in the room. This is deliberately the
//! opposite of the weakest-link rule used for business-impact severity.

use crate::core::{SecurityLevel, SecurityLevelTriple};

/// Week estimate for implementing one component at one level.
fn implementation_weeks(level: SecurityLevel) -> f64 {
    match level {
        SecurityLevel::None => 0.0,
        SecurityLevel::Low => 2.0,
        SecurityLevel::Moderate => 6.0,
        SecurityLevel::High => 12.0,
        SecurityLevel::VeryHigh => 24.0,
    }
}

/// Work on the three components overlaps; the summed estimate is scaled
/// down accordingly.
const PARALLEL_WORK_FACTOR: f64 = 0.6;

#[derive(Debug, Default)]
pub struct ImplementationAdvisor;

impl ImplementationAdvisor {
    pub fn new() -> Self {
        Self
    }

    /// Discounted total effort in weeks, before bucketing.
    pub fn effort_weeks(&self, triple: SecurityLevelTriple) -> f64 {
        let summed: f64 = triple
            .entries()
            .iter()
            .map(|&(_, level)| implementation_weeks(level))
            .sum();
        summed * PARALLEL_WORK_FACTOR
    }

    /// Human-readable duration: week counts for short efforts, month
    /// ranges beyond that.
    pub fn total_implementation_time(&self, triple: SecurityLevelTriple) -> String {
        let weeks = self.effort_weeks(triple);
        if weeks == 0.0 {
            return "No implementation required".to_string();
        }

        let rounded = weeks.round().max(1.0) as u32;
        if weeks < 8.0 {
            if rounded == 1 {
                "1 week".to_string()
            } else {
                format!("{rounded} weeks")
            }
        } else if weeks < 13.0 {
            "2-3 months".to_string()
        } else if weeks < 26.0 {
            "3-6 months".to_string()
        } else {
            "6+ months".to_string()
        }
    }

    /// Staffing requirement, driven by the strongest component requirement.
    pub fn required_expertise(&self, triple: SecurityLevelTriple) -> &'static str {
        match triple.max_level() {
            SecurityLevel::None => "No specialized security expertise required",
            SecurityLevel::Low => "IT staff with basic security training",
            SecurityLevel::Moderate => "Dedicated security professional",
            SecurityLevel::High => "Senior security specialists",
            SecurityLevel::VeryHigh => "Dedicated security team with specialized domain experts",
        }
    }

    /// Three-phase rollout narrative: close the worst gaps, lift the
    /// weakest component, then converge on the highest level present.
    pub fn implementation_plan(&self, triple: SecurityLevelTriple) -> String {
        let mut phases = Vec::with_capacity(3);

        let unprotected: Vec<String> = triple
            .entries()
            .iter()
            .filter(|&&(_, level)| level == SecurityLevel::None)
            .map(|&(component, _)| component.to_string())
            .collect();
        let baseline_only: Vec<String> = triple
            .entries()
            .iter()
            .filter(|&&(_, level)| level == SecurityLevel::Low)
            .map(|&(component, _)| component.to_string())
            .collect();

        if !unprotected.is_empty() {
            phases.push(format!(
                "Phase 1: Establish minimum protection for {} (currently at None)",
                unprotected.join(" and ")
            ));
        } else if !baseline_only.is_empty() {
            phases.push(format!(
                "Phase 1: Raise the Low baseline for {} to a standard level",
                baseline_only.join(" and ")
            ));
        } else {
            phases.push(
                "Phase 1: Baseline controls are in place across all components".to_string(),
            );
        }

        let weakest = triple.entries().iter().min_by_key(|&&(_, level)| level).copied();
        match weakest {
            Some((component, level)) if level.next_up().is_some() => {
                phases.push(format!(
                    "Phase 2: Prioritize upgrading {} from {} to {}",
                    component,
                    level,
                    level.next_up().map(|l| l.label()).unwrap_or(level.label())
                ));
            }
            _ => {
                phases.push(
                    "Phase 2: All components already at the maximum level; focus on operational maturity"
                        .to_string(),
                );
            }
        }

        let ceiling = triple.max_level();
        if triple.min_level() == ceiling {
            phases.push(format!(
                "Phase 3: Maintain the uniform {} posture and review it against evolving threats",
                ceiling
            ));
        } else {
            phases.push(format!(
                "Phase 3: Longer term, bring all components up to the {} level already reached by the strongest",
                ceiling
            ));
        }

        phases.join("\n")
    }
}
