//! MME Calculator - converts a daily dose of any catalog drug to morphine
//! milligram equivalents.

use serde::Serialize;
use tracing::{debug, error};

use crate::domain::catalog::{
    band_for_dose, find_drug, ConversionKind, Drug, MethadoneBand, METHADONE_MIN_DOSE,
};
use crate::domain::foundation::{round_to_tenth, EngineError, LookupError, ValidationError};

/// Advisory attached to every methadone calculation.
pub const METHADONE_WARNING: &str =
    "Methadone conversion requires clinical judgment due to complex pharmacokinetics";

/// Band details reported for dose-dependent conversions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethadoneDetail {
    pub band: MethadoneBand,
    /// e.g. "41-60 mg".
    pub dose_range: String,
    pub warning: &'static str,
}

/// Outcome of an MME calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MmeResult {
    /// Daily MME, rounded to one decimal.
    pub meq: f64,
    pub drug: &'static Drug,
    /// The dose as given.
    pub dose: f64,
    /// Factor actually applied (the band factor for methadone).
    pub conversion_factor: f64,
    /// Informational only.
    pub formula: String,
    /// Present only for dose-dependent drugs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub methadone: Option<MethadoneDetail>,
}

/// Stateless MME calculator.
pub struct MmeCalculator;

impl MmeCalculator {
    /// Computes the daily MME for `dose` of `drug_id`.
    ///
    /// # Errors
    ///
    /// - `ValidationError::NonPositiveDose` when the dose is not above zero
    /// - `ValidationError::DrugNotFound` for an unknown identifier
    /// - methadone-specific errors from [`MmeCalculator::calculate_methadone`]
    pub fn calculate(drug_id: &str, dose: f64) -> Result<MmeResult, EngineError> {
        if !(dose > 0.0) {
            return Err(ValidationError::NonPositiveDose.into());
        }

        let drug = find_drug(drug_id).ok_or_else(|| ValidationError::drug_not_found(drug_id))?;

        let factor = match drug.conversion {
            ConversionKind::Standard { factor } => factor,
            ConversionKind::DoseDependent { bands } => {
                return Self::calculate_methadone(drug, bands, dose);
            }
        };

        let meq = round_to_tenth(dose * factor);
        debug!(drug = drug.id, dose, factor, meq, "Calculated MME");

        Ok(MmeResult {
            meq,
            drug,
            dose,
            conversion_factor: factor,
            formula: drug.formula(),
            methadone: None,
        })
    }

    /// Computes MME for a dose-dependent drug using its banding table.
    ///
    /// # Errors
    ///
    /// - `ValidationError::MethadoneDoseTooLow` below 1 mg
    /// - `LookupError::NoMatchingBand` if the table has no band for the dose
    pub fn calculate_methadone(
        drug: &'static Drug,
        bands: &'static [MethadoneBand],
        dose: f64,
    ) -> Result<MmeResult, EngineError> {
        if dose < METHADONE_MIN_DOSE {
            return Err(ValidationError::MethadoneDoseTooLow.into());
        }

        let band = band_for_dose(bands, dose).ok_or_else(|| {
            error!(drug = drug.id, dose, "No methadone band covers dose");
            LookupError::NoMatchingBand { dose }
        })?;

        let meq = round_to_tenth(dose * band.factor);
        debug!(drug = drug.id, dose, factor = band.factor, meq, "Calculated methadone MME");

        Ok(MmeResult {
            meq,
            drug,
            dose,
            conversion_factor: band.factor,
            formula: format!("MEQ = {} × {}", dose, band.factor),
            methadone: Some(MethadoneDetail {
                band: *band,
                dose_range: band.dose_range(),
                warning: METHADONE_WARNING,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn oral_morphine_is_identity() {
        let result = MmeCalculator::calculate("morphine-oral", 30.0).unwrap();
        assert_eq!(result.meq, 30.0);
        assert_eq!(result.conversion_factor, 1.0);
        assert!(result.methadone.is_none());
    }

    #[test]
    fn fentanyl_25_is_100_mme() {
        let result = MmeCalculator::calculate("fentanyl", 25.0).unwrap();
        assert_eq!(result.meq, 100.0);
        assert_eq!(result.formula, "MEQ = fentanyl × 4");
    }

    #[test]
    fn result_is_rounded_to_one_decimal() {
        // 2.22 × 1.5 = 3.33
        let result = MmeCalculator::calculate("oxycodone", 2.22).unwrap();
        assert_eq!(result.meq, 3.3);
        assert_eq!(result.dose, 2.22);
    }

    #[test]
    fn methadone_50_uses_41_to_60_band() {
        let result = MmeCalculator::calculate("methadone", 50.0).unwrap();
        assert_eq!(result.meq, 500.0);
        assert_eq!(result.conversion_factor, 10.0);
        assert_eq!(result.formula, "MEQ = 50 × 10");

        let detail = result.methadone.unwrap();
        assert_eq!(detail.dose_range, "41-60 mg");
        assert_eq!(detail.warning, METHADONE_WARNING);
    }

    #[test]
    fn methadone_top_band_is_unbounded() {
        let result = MmeCalculator::calculate("methadone", 120.0).unwrap();
        assert_eq!(result.meq, 1800.0);
        assert_eq!(result.methadone.unwrap().dose_range, "81-∞ mg");
    }

    #[test]
    fn non_positive_dose_is_rejected_before_lookup() {
        for dose in [0.0, -5.0, f64::NAN] {
            let err = MmeCalculator::calculate("not-a-drug", dose).unwrap_err();
            assert_eq!(err, EngineError::Validation(ValidationError::NonPositiveDose));
        }
    }

    #[test]
    fn unknown_drug_is_rejected() {
        let err = MmeCalculator::calculate("heroin", 10.0).unwrap_err();
        assert_eq!(err.to_string(), "Drug not found");
        assert_eq!(err.code(), ErrorCode::DrugNotFound);
    }

    #[test]
    fn methadone_below_one_mg_is_rejected() {
        let err = MmeCalculator::calculate("methadone", 0.5).unwrap_err();
        assert_eq!(err.to_string(), "Methadone dose must be at least 1 mg");
    }

    #[test]
    fn empty_band_table_is_a_lookup_defect() {
        let drug = find_drug("methadone").unwrap();
        let err = MmeCalculator::calculate_methadone(drug, &[], 10.0).unwrap_err();
        assert!(err.is_defect());
        assert_eq!(err.to_string(), "Unable to determine conversion factor");
    }
}
