//! Safety advisory shown alongside a conversion.

use serde::Serialize;

/// MME at or above which the high-dose alert is raised.
pub const HIGH_DOSE_MME: f64 = 90.0;

/// MME at or above which increased monitoring applies.
pub const MONITORING_MME: f64 = 50.0;

pub const HIGH_DOSE_ALERT: &str = "Daily MME ≥90 mg requires careful justification, enhanced \
    patient monitoring, and consideration of specialist consultation per CDC guidelines. \
    Document rationale and obtain informed consent.";

pub const MEDICAL_DISCLAIMER: &str = "This calculator is a clinical guide only and does not \
    replace professional medical judgment. All opioid conversions require individualization \
    based on patient-specific factors, clinical context, and ongoing monitoring. Consult with \
    a pain specialist or addiction medicine specialist for complex cases.";

/// How prominently the warning panel should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    Warning,
    Danger,
}

impl AlertSeverity {
    pub fn for_meq(meq: f64) -> Self {
        if meq >= HIGH_DOSE_MME {
            AlertSeverity::Danger
        } else if meq >= MONITORING_MME {
            AlertSeverity::Warning
        } else {
            AlertSeverity::Info
        }
    }
}

/// Warnings bundled with severity, the optional high-dose alert and the
/// disclaimer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SafetyAdvisory {
    pub severity: AlertSeverity,
    pub warnings: Vec<String>,
    pub high_dose_alert: Option<&'static str>,
    pub disclaimer: &'static str,
}

impl SafetyAdvisory {
    pub fn new(warnings: Vec<String>, meq: f64) -> Self {
        Self {
            severity: AlertSeverity::for_meq(meq),
            warnings,
            high_dose_alert: (meq >= HIGH_DOSE_MME).then_some(HIGH_DOSE_ALERT),
            disclaimer: MEDICAL_DISCLAIMER,
        }
    }
}
