//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Malformed or out-of-range input. Always user-correctable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Dose must be greater than 0")]
    NonPositiveDose,

    #[error("Drug not found")]
    DrugNotFound { drug_id: String },

    #[error("Methadone dose must be at least 1 mg")]
    MethadoneDoseTooLow,

    #[error("Please select a source drug")]
    MissingSourceDrug,

    #[error("Please select a target drug")]
    MissingTargetDrug,

    #[error("Source and target drugs must be different")]
    SameDrug,
}

impl ValidationError {
    /// Creates a drug-not-found error for the given identifier.
    pub fn drug_not_found(drug_id: impl Into<String>) -> Self {
        ValidationError::DrugNotFound {
            drug_id: drug_id.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::NonPositiveDose => ErrorCode::InvalidDose,
            ValidationError::DrugNotFound { .. } => ErrorCode::DrugNotFound,
            ValidationError::MethadoneDoseTooLow => ErrorCode::MethadoneDoseTooLow,
            ValidationError::MissingSourceDrug => ErrorCode::MissingSourceDrug,
            ValidationError::MissingTargetDrug => ErrorCode::MissingTargetDrug,
            ValidationError::SameDrug => ErrorCode::SameDrug,
        }
    }
}

/// A well-formed request that conversion policy refuses to answer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error(
        "Cannot automatically convert TO methadone due to dose-dependent factors. \
         Clinical consultation required."
    )]
    DoseDependentTarget {
        /// Source MME, kept so the caller can still display it.
        meq: f64,
    },
}

/// Catalog or table inconsistency. Indicates a defect rather than bad input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    #[error("Unable to determine conversion factor")]
    NoMatchingBand { dose: f64 },

    #[error("Target drug not found")]
    TargetDrugNotFound { drug_id: String },
}

/// Any failure produced by the conversion engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl EngineError {
    /// Returns the machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EngineError::Validation(err) => err.code(),
            EngineError::Conversion(ConversionError::DoseDependentTarget { .. }) => {
                ErrorCode::ConversionRefused
            }
            EngineError::Lookup(LookupError::NoMatchingBand { .. }) => ErrorCode::BandNotFound,
            EngineError::Lookup(LookupError::TargetDrugNotFound { .. }) => {
                ErrorCode::TargetNotFound
            }
        }
    }

    /// Partial context carried alongside the error, if any.
    pub fn meq(&self) -> Option<f64> {
        match self {
            EngineError::Conversion(ConversionError::DoseDependentTarget { meq }) => Some(*meq),
            _ => None,
        }
    }

    /// True when the error signals a catalog defect instead of a user mistake.
    pub fn is_defect(&self) -> bool {
        matches!(self, EngineError::Lookup(_))
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    InvalidDose,
    DrugNotFound,
    MethadoneDoseTooLow,
    MissingSourceDrug,
    MissingTargetDrug,
    SameDrug,

    // Policy errors
    ConversionRefused,

    // Catalog errors
    TargetNotFound,
    BandNotFound,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidDose => "INVALID_DOSE",
            ErrorCode::DrugNotFound => "DRUG_NOT_FOUND",
            ErrorCode::MethadoneDoseTooLow => "METHADONE_DOSE_TOO_LOW",
            ErrorCode::MissingSourceDrug => "MISSING_SOURCE_DRUG",
            ErrorCode::MissingTargetDrug => "MISSING_TARGET_DRUG",
            ErrorCode::SameDrug => "SAME_DRUG",
            ErrorCode::ConversionRefused => "CONVERSION_REFUSED",
            ErrorCode::TargetNotFound => "TARGET_NOT_FOUND",
            ErrorCode::BandNotFound => "BAND_NOT_FOUND",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_match_user_facing_text() {
        assert_eq!(
            ValidationError::NonPositiveDose.to_string(),
            "Dose must be greater than 0"
        );
        assert_eq!(
            ValidationError::drug_not_found("heroin").to_string(),
            "Drug not found"
        );
        assert_eq!(
            ValidationError::MethadoneDoseTooLow.to_string(),
            "Methadone dose must be at least 1 mg"
        );
    }

    #[test]
    fn refusal_message_is_fixed() {
        let err = ConversionError::DoseDependentTarget { meq: 45.0 };
        assert_eq!(
            err.to_string(),
            "Cannot automatically convert TO methadone due to dose-dependent factors. \
             Clinical consultation required."
        );
    }

    #[test]
    fn engine_error_is_transparent() {
        let err: EngineError = LookupError::TargetDrugNotFound {
            drug_id: "x".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Target drug not found");
        assert_eq!(err.code(), ErrorCode::TargetNotFound);
    }

    #[test]
    fn only_refusal_carries_meq() {
        let refused: EngineError = ConversionError::DoseDependentTarget { meq: 120.0 }.into();
        assert_eq!(refused.meq(), Some(120.0));

        let invalid: EngineError = ValidationError::NonPositiveDose.into();
        assert_eq!(invalid.meq(), None);
    }

    #[test]
    fn lookup_errors_are_defects() {
        let defect: EngineError = LookupError::NoMatchingBand { dose: 0.5 }.into();
        assert!(defect.is_defect());
        assert!(!EngineError::from(ValidationError::SameDrug).is_defect());
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::ConversionRefused), "CONVERSION_REFUSED");
        assert_eq!(format!("{}", ErrorCode::MethadoneDoseTooLow), "METHADONE_DOSE_TOO_LOW");
    }
}
