//! CLI DTOs (Data Transfer Objects) for JSON output.
//!
//! These types define the JSON shapes the CLI prints. They are the boundary
//! between the presentation shell and the application layer.

use serde::Serialize;

use crate::domain::catalog::{DoseUnit, Drug, WarningLevel};
use crate::domain::foundation::EngineError;

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One catalog entry as a picker would show it.
#[derive(Debug, Clone, Serialize)]
pub struct DrugSummary {
    pub id: &'static str,
    /// Name with brand names, e.g. "Oxycodone (OxyContin, OxyNEO)".
    pub label: String,
    pub route: &'static str,
    pub unit: DoseUnit,
    pub formula: String,
    /// Smallest accepted daily dose.
    pub minimum_dose: f64,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning_level: Option<WarningLevel>,
}

impl From<&Drug> for DrugSummary {
    fn from(drug: &Drug) -> Self {
        Self {
            id: drug.id,
            label: drug.selector_label(),
            route: drug.route,
            unit: drug.unit,
            formula: drug.formula(),
            minimum_dose: drug.minimum_dose(),
            description: drug.description,
            note: drug.note,
            warning_level: drug.warning_level,
        }
    }
}

/// Error body: the message, its code and any partial context.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meq: Option<f64>,
}

impl From<&EngineError> for ErrorResponse {
    fn from(err: &EngineError) -> Self {
        Self {
            error: err.to_string(),
            code: err.code().to_string(),
            meq: err.meq(),
        }
    }
}
