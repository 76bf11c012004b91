//! Drug-to-Drug Converter.
//!
//! Converts a source regimen to MME, then MME to the target drug, applying
//! the cross-tolerance reductions and breakthrough range clinicians use when
//! rotating opioids.

use serde::Serialize;
use tracing::{debug, warn};

use super::{MmeCalculator, WarningGenerator};
use crate::domain::catalog::{find_drug, ConversionKind, Drug};
use crate::domain::foundation::{round_to_tenth, ConversionError, EngineError, LookupError};
use crate::domain::safety::SafetyLevel;

/// Fraction kept after a 25% cross-tolerance reduction.
const REDUCTION_25_KEEP: f64 = 0.75;

/// Fraction kept after a 50% cross-tolerance reduction.
const REDUCTION_50_KEEP: f64 = 0.50;

/// Breakthrough dose bounds as divisors of the total daily dose.
const BREAKTHROUGH_MIN_DIVISOR: f64 = 10.0;
const BREAKTHROUGH_MAX_DIVISOR: f64 = 6.0;

/// As-needed supplemental dose range, in the target drug's unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreakthroughRange {
    pub min: f64,
    pub max: f64,
}

/// A completed conversion. Built fresh per call and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub from_drug: &'static Drug,
    pub to_drug: &'static Drug,
    pub current_dose: f64,
    /// Source daily MME.
    pub meq: f64,
    /// Equivalent target dose before any reduction.
    pub calculated_dose: f64,
    /// Target dose after a 25% reduction.
    pub recommended_dose_25: f64,
    /// Target dose after a 50% reduction.
    pub recommended_dose_50: f64,
    pub breakthrough_dose_range: BreakthroughRange,
    pub safety_level: SafetyLevel,
    pub warnings: Vec<String>,
}

/// Stateless drug-to-drug converter.
pub struct DrugConverter;

impl DrugConverter {
    /// Converts `current_dose` of `from_drug_id` into `to_drug_id`.
    ///
    /// # Errors
    ///
    /// - any error from [`MmeCalculator::calculate`] for the source, unchanged
    /// - `LookupError::TargetDrugNotFound` for an unknown target
    /// - `ConversionError::DoseDependentTarget` when the target is methadone;
    ///   the error carries the source MME
    pub fn convert(
        from_drug_id: &str,
        to_drug_id: &str,
        current_dose: f64,
    ) -> Result<ConversionResult, EngineError> {
        let source = MmeCalculator::calculate(from_drug_id, current_dose)?;

        let to_drug = find_drug(to_drug_id).ok_or_else(|| LookupError::TargetDrugNotFound {
            drug_id: to_drug_id.to_string(),
        })?;

        // The banding table is calibrated for methadone as a source only.
        let target_factor = match to_drug.conversion {
            ConversionKind::Standard { factor } => factor,
            ConversionKind::DoseDependent { .. } => {
                warn!(
                    from = source.drug.id,
                    to = to_drug.id,
                    meq = source.meq,
                    "Refused conversion to dose-dependent drug"
                );
                return Err(ConversionError::DoseDependentTarget { meq: source.meq }.into());
            }
        };

        let target_dose = source.meq / target_factor;

        // Breakthrough uses the unreduced equivalent dose.
        let breakthrough_dose_range = BreakthroughRange {
            min: round_to_tenth(target_dose / BREAKTHROUGH_MIN_DIVISOR),
            max: round_to_tenth(target_dose / BREAKTHROUGH_MAX_DIVISOR),
        };

        let result = ConversionResult {
            from_drug: source.drug,
            to_drug,
            current_dose,
            meq: source.meq,
            calculated_dose: round_to_tenth(target_dose),
            recommended_dose_25: round_to_tenth(target_dose * REDUCTION_25_KEEP),
            recommended_dose_50: round_to_tenth(target_dose * REDUCTION_50_KEEP),
            breakthrough_dose_range,
            safety_level: SafetyLevel::for_meq(source.meq),
            warnings: WarningGenerator::messages_for(source.drug, to_drug, source.meq),
        };

        debug!(
            from = result.from_drug.id,
            to = result.to_drug.id,
            meq = result.meq,
            calculated_dose = result.calculated_dose,
            tier = ?result.safety_level.tier,
            "Converted dose"
        );

        Ok(result)
    }
}
