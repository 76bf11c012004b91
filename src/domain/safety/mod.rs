//! Safety module - MME risk tiers and the advisory built around them.

mod advisory;
mod tier;

pub use advisory::{
    AlertSeverity, SafetyAdvisory, HIGH_DOSE_ALERT, HIGH_DOSE_MME, MEDICAL_DISCLAIMER,
    MONITORING_MME,
};
pub use tier::{RiskColor, RiskTier, SafetyLevel, SafetyThreshold, SAFETY_THRESHOLDS};
