//! Input Validator - collects every problem with a conversion request.

use serde::{Serialize, Serializer};

use crate::domain::catalog::{find_drug, METHADONE_MIN_DOSE};
use crate::domain::foundation::ValidationError;

/// All problems found with a request. Never short-circuits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    #[serde(serialize_with = "serialize_messages")]
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Error messages in the order they were found.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

fn serialize_messages<S>(errors: &[ValidationError], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(errors.iter().map(ToString::to_string))
}

/// Validates conversion requests before they reach the converter.
pub struct ConversionValidator;

impl ConversionValidator {
    /// Checks source, target and dose, returning every applicable error.
    ///
    /// An empty identifier counts as "not selected". A dose of `None` counts
    /// as absent.
    pub fn validate(from_drug_id: &str, to_drug_id: &str, dose: Option<f64>) -> ValidationReport {
        let mut errors = Vec::new();

        if from_drug_id.is_empty() {
            errors.push(ValidationError::MissingSourceDrug);
        }

        if to_drug_id.is_empty() {
            errors.push(ValidationError::MissingTargetDrug);
        }

        if from_drug_id == to_drug_id {
            errors.push(ValidationError::SameDrug);
        }

        let positive = dose.filter(|d| *d > 0.0);
        if positive.is_none() {
            errors.push(ValidationError::NonPositiveDose);
        }

        let from_drug = find_drug(from_drug_id);
        if let (Some(drug), Some(d)) = (from_drug, dose) {
            if drug.is_dose_dependent() && d < METHADONE_MIN_DOSE {
                errors.push(ValidationError::MethadoneDoseTooLow);
            }
        }

        ValidationReport::from_errors(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_request_has_no_errors() {
        let report = ConversionValidator::validate("morphine-oral", "oxycodone", Some(30.0));
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn empty_request_reports_everything() {
        let report = ConversionValidator::validate("", "", Some(0.0));
        assert!(!report.is_valid);
        assert_eq!(
            report.errors,
            vec![
                ValidationError::MissingSourceDrug,
                ValidationError::MissingTargetDrug,
                ValidationError::SameDrug,
                ValidationError::NonPositiveDose,
            ]
        );
    }

    #[test]
    fn same_drug_is_rejected() {
        let report = ConversionValidator::validate("oxycodone", "oxycodone", Some(10.0));
        assert_eq!(report.errors, vec![ValidationError::SameDrug]);
    }

    #[test]
    fn absent_dose_is_rejected() {
        let report = ConversionValidator::validate("oxycodone", "fentanyl", None);
        assert_eq!(report.errors, vec![ValidationError::NonPositiveDose]);
    }

    #[test]
    fn sub_milligram_methadone_is_rejected() {
        let report = ConversionValidator::validate("methadone", "oxycodone", Some(0.5));
        assert_eq!(report.errors, vec![ValidationError::MethadoneDoseTooLow]);
    }

    #[test]
    fn zero_methadone_reports_both_dose_errors() {
        let report = ConversionValidator::validate("methadone", "oxycodone", Some(0.0));
        assert_eq!(
            report.errors,
            vec![
                ValidationError::NonPositiveDose,
                ValidationError::MethadoneDoseTooLow
            ]
        );
    }

    #[test]
    fn unknown_drugs_are_left_to_the_converter() {
        let report = ConversionValidator::validate("heroin", "oxycodone", Some(10.0));
        assert!(report.is_valid);
    }

    #[test]
    fn report_serializes_messages() {
        let report = ConversionValidator::validate("oxycodone", "oxycodone", None);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["is_valid"], false);
        assert_eq!(json["errors"][0], "Source and target drugs must be different");
        assert_eq!(json["errors"][1], "Dose must be greater than 0");
    }
}
