//! Safety tiers keyed by daily MME.

use serde::Serialize;
use std::fmt;

/// Risk tier for a daily MME.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
    Critical,
}

/// Display color associated with a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskColor {
    Success,
    Warning,
    Danger,
}

/// One row of the threshold table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SafetyThreshold {
    pub tier: RiskTier,
    /// Inclusive upper bound in MME. None = unbounded.
    pub max: Option<f64>,
    pub label: &'static str,
    pub color: RiskColor,
    pub description: &'static str,
}

/// Thresholds in ascending order; together they partition [0, ∞).
///
/// | Tier     | MME      |
/// |----------|----------|
/// | Low      | ≤ 50     |
/// | Moderate | ≤ 90     |
/// | High     | ≤ 200    |
/// | Critical | > 200    |
pub static SAFETY_THRESHOLDS: [SafetyThreshold; 4] = [
    SafetyThreshold {
        tier: RiskTier::Low,
        max: Some(50.0),
        label: "Low Risk",
        color: RiskColor::Success,
        description: "Standard monitoring recommended",
    },
    SafetyThreshold {
        tier: RiskTier::Moderate,
        max: Some(90.0),
        label: "Moderate Risk",
        color: RiskColor::Warning,
        description: "Increased monitoring and caution advised",
    },
    SafetyThreshold {
        tier: RiskTier::High,
        max: Some(200.0),
        label: "High Risk",
        color: RiskColor::Danger,
        description: "Specialist consultation recommended",
    },
    SafetyThreshold {
        tier: RiskTier::Critical,
        max: None,
        label: "Critical Risk",
        color: RiskColor::Danger,
        description: "Immediate specialist consultation required",
    },
];

/// MME at which the risk gauge reads full.
const GAUGE_FULL_SCALE_MME: f64 = 200.0;

/// A threshold row together with the MME it was looked up for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SafetyLevel {
    pub tier: RiskTier,
    pub max: Option<f64>,
    pub label: &'static str,
    pub color: RiskColor,
    pub description: &'static str,
    /// The queried MME.
    pub value: f64,
}

impl SafetyLevel {
    /// Looks up the tier for a daily MME.
    ///
    /// Total over every input: the first threshold whose max is at or above
    /// the MME wins, and anything past the last bounded row is critical.
    pub fn for_meq(meq: f64) -> Self {
        let threshold = SAFETY_THRESHOLDS
            .iter()
            .find(|t| t.max.map_or(true, |max| meq <= max))
            .unwrap_or(&SAFETY_THRESHOLDS[SAFETY_THRESHOLDS.len() - 1]);

        Self {
            tier: threshold.tier,
            max: threshold.max,
            label: threshold.label,
            color: threshold.color,
            description: threshold.description,
            value: meq,
        }
    }

    /// Gauge fill (0-100) scaled so 200 MME reads full.
    pub fn gauge_percent(&self) -> f64 {
        (self.value / GAUGE_FULL_SCALE_MME * 100.0).clamp(0.0, 100.0)
    }
}

impl fmt::Display for SafetyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} MME)", self.label, self.value)
    }
}
