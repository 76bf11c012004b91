//! ConvertDoseHandler - validates a rotation request and converts it.

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::conversion::{
    ConversionResult, ConversionValidator, DrugConverter, ValidationReport,
};
use crate::domain::foundation::EngineError;
use crate::domain::safety::SafetyAdvisory;

/// Command to convert a daily dose from one drug to another.
#[derive(Debug, Clone)]
pub struct ConvertDoseCommand {
    pub from_drug_id: String,
    pub to_drug_id: String,
    /// None when the caller has no dose to supply.
    pub dose: Option<f64>,
}

/// Result of a successful conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvertDoseResult {
    pub conversion: ConversionResult,
    pub advisory: SafetyAdvisory,
}

/// Why a conversion could not be produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertDoseError {
    #[error("Invalid conversion request: {}", .0.messages().join("; "))]
    Invalid(ValidationReport),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Handler for dose conversions.
#[derive(Debug, Default)]
pub struct ConvertDoseHandler;

impl ConvertDoseHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: ConvertDoseCommand) -> Result<ConvertDoseResult, ConvertDoseError> {
        // 1. Validate everything up front so the caller sees all problems
        let report = ConversionValidator::validate(&cmd.from_drug_id, &cmd.to_drug_id, cmd.dose);
        if !report.is_valid {
            warn!(
                from = %cmd.from_drug_id,
                to = %cmd.to_drug_id,
                errors = report.errors.len(),
                "Rejected invalid conversion request"
            );
            return Err(ConvertDoseError::Invalid(report));
        }

        // 2. Convert
        let dose = cmd.dose.unwrap_or_default();
        let conversion = DrugConverter::convert(&cmd.from_drug_id, &cmd.to_drug_id, dose)
            .map_err(|err| {
                warn!(code = %err.code(), error = %err, "Conversion failed");
                err
            })?;

        // 3. Attach the advisory shown alongside the result
        let advisory = SafetyAdvisory::new(conversion.warnings.clone(), conversion.meq);

        info!(
            from = conversion.from_drug.id,
            to = conversion.to_drug.id,
            meq = conversion.meq,
            severity = ?advisory.severity,
            "Conversion completed"
        );

        Ok(ConvertDoseResult {
            conversion,
            advisory,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ErrorCode, ValidationError};
    use crate::domain::safety::AlertSeverity;

    fn command(from: &str, to: &str, dose: Option<f64>) -> ConvertDoseCommand {
        ConvertDoseCommand {
            from_drug_id: from.to_string(),
            to_drug_id: to.to_string(),
            dose,
        }
    }

    #[test]
    fn converts_valid_request() {
        let handler = ConvertDoseHandler::new();
        let result = handler
            .handle(command("morphine-oral", "oxycodone", Some(30.0)))
            .unwrap();

        assert_eq!(result.conversion.calculated_dose, 20.0);
        assert_eq!(result.advisory.severity, AlertSeverity::Info);
        assert_eq!(result.advisory.warnings, result.conversion.warnings);
    }

    #[test]
    fn invalid_request_returns_full_report() {
        let handler = ConvertDoseHandler::new();
        let err = handler.handle(command("", "", None)).unwrap_err();

        match err {
            ConvertDoseError::Invalid(report) => {
                assert!(!report.is_valid);
                assert!(report.errors.len() >= 3);
                assert!(report.errors.contains(&ValidationError::NonPositiveDose));
            }
            other => panic!("Expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn refusal_surfaces_engine_error() {
        let handler = ConvertDoseHandler::new();
        let err = handler
            .handle(command("fentanyl", "methadone", Some(25.0)))
            .unwrap_err();

        match err {
            ConvertDoseError::Engine(engine) => {
                assert_eq!(engine.code(), ErrorCode::ConversionRefused);
                assert_eq!(engine.meq(), Some(100.0));
            }
            other => panic!("Expected Engine error, got {:?}", other),
        }
    }

    #[test]
    fn high_dose_conversion_raises_alert() {
        let handler = ConvertDoseHandler::new();
        let result = handler
            .handle(command("hydromorphone-oral", "morphine-oral", Some(30.0)))
            .unwrap();

        assert_eq!(result.conversion.meq, 120.0);
        assert_eq!(result.advisory.severity, AlertSeverity::Danger);
        assert!(result.advisory.high_dose_alert.is_some());
    }

    #[test]
    fn invalid_error_message_lists_problems() {
        let err = ConvertDoseHandler::new()
            .handle(command("oxycodone", "oxycodone", Some(10.0)))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid conversion request: Source and target drugs must be different"
        );
    }
}
