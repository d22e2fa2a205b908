//! ROI: level-driven return rates applied to an implementation cost.

use crate::core::SecurityLevel;
use crate::dataset::{parse_return_rate, ContentProvider, RoiEstimate};
use serde::Serialize;

/// Computed ROI for one level/cost pair. Display strings, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoiMetrics {
    /// Absolute return, e.g. "$15,000". Always "$0" when cost is not positive.
    pub value: String,
    /// Normalized return rate, e.g. "150%".
    pub percentage: String,
    pub description: String,
}

pub struct RoiCalculator<'a> {
    provider: &'a dyn ContentProvider,
}

impl<'a> RoiCalculator<'a> {
    pub fn new(provider: &'a dyn ContentProvider) -> Self {
        Self { provider }
    }

    /// Per-level ROI estimate. A dataset gap degrades to the zero-return
    /// estimate instead of failing.
    pub fn roi_estimate(&self, level: SecurityLevel) -> RoiEstimate {
        match self.provider.roi_estimate(level) {
            Some(estimate) => estimate.clone(),
            None => {
                log::warn!("no ROI estimate for level {level}, defaulting to 0%");
                RoiEstimate {
                    return_rate: "0%".to_string(),
                    description: "No return estimate available for this level".to_string(),
                }
            }
        }
    }

    /// Optional-level variant: absent input degrades to the `None` level's
    /// estimate (0% return) rather than erroring.
    pub fn roi_estimate_opt(&self, level: Option<SecurityLevel>) -> RoiEstimate {
        self.roi_estimate(SecurityLevel::or_none(level))
    }

    /// ROI arithmetic: `value = cost * rate / 100` when cost is positive,
    /// `$0` otherwise. Cost gates the absolute value; the level alone
    /// determines the percentage, which is reported even at zero cost.
    pub fn calculate_roi(&self, level: SecurityLevel, implementation_cost: f64) -> RoiMetrics {
        let estimate = self.roi_estimate(level);
        let rate = parse_return_rate(&estimate.return_rate).unwrap_or_else(|| {
            log::warn!(
                "unparseable return rate {:?} for level {level}, treating as 0%",
                estimate.return_rate
            );
            0
        });

        let value = if implementation_cost > 0.0 {
            implementation_cost * rate as f64 / 100.0
        } else {
            0.0
        };

        RoiMetrics {
            value: format_currency(value),
            percentage: format!("{rate}%"),
            description: estimate.description,
        }
    }
}

/// Dollar formatting with thousands separators: 15000 -> "$15,000".
/// Fractional cents are kept only when present.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let total_cents = (amount.abs() * 100.0).round() as u64;
    let whole = total_cents / 100;
    let cents = total_cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    if cents == 0 {
        format!("{sign}${grouped}")
    } else {
        format!("{sign}${grouped}.{cents:02}")
    }
}
