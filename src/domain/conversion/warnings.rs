//! Warning generation for drug-to-drug conversions.

use std::fmt;

use crate::domain::catalog::Drug;
use crate::domain::safety::{HIGH_DOSE_MME, MONITORING_MME};

/// Drugs whose conversions always need specialist oversight.
pub const HIGH_RISK_DRUG_IDS: &[&str] = &["methadone", "fentanyl", "sufentanil"];

/// A conversion warning. Order of emission is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionWarning {
    HighRiskConversion,
    HighDailyMme,
    IncreasedMonitoring,
    CrossToleranceReduction,
    AvoidBenzodiazepines,
}

impl ConversionWarning {
    pub fn message(&self) -> &'static str {
        match self {
            ConversionWarning::HighRiskConversion => {
                "⚠️ High-risk conversion: Methadone and fentanyl require specialist oversight"
            }
            ConversionWarning::HighDailyMme => {
                "⚠️ Daily MME ≥90: CDC guidelines recommend careful justification and \
                 specialist consultation"
            }
            ConversionWarning::IncreasedMonitoring => {
                "⚠️ Daily MME ≥50: Increased monitoring recommended"
            }
            ConversionWarning::CrossToleranceReduction => {
                "✓ Apply 25-50% dose reduction when switching opioids to account for \
                 incomplete cross-tolerance"
            }
            ConversionWarning::AvoidBenzodiazepines => {
                "⚠️ Avoid concurrent benzodiazepine prescriptions when possible"
            }
        }
    }
}

impl fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Builds the ordered warning list for a conversion.
pub struct WarningGenerator;

impl WarningGenerator {
    /// Warnings for converting `from` to `to` at the given source MME.
    pub fn warnings_for(from: &Drug, to: &Drug, meq: f64) -> Vec<ConversionWarning> {
        let mut warnings = Vec::with_capacity(4);

        if Self::is_high_risk(from) || Self::is_high_risk(to) {
            warnings.push(ConversionWarning::HighRiskConversion);
        }

        if meq >= HIGH_DOSE_MME {
            warnings.push(ConversionWarning::HighDailyMme);
        } else if meq >= MONITORING_MME {
            warnings.push(ConversionWarning::IncreasedMonitoring);
        }

        warnings.push(ConversionWarning::CrossToleranceReduction);
        warnings.push(ConversionWarning::AvoidBenzodiazepines);

        warnings
    }

    /// Same as [`WarningGenerator::warnings_for`], rendered as display strings.
    pub fn messages_for(from: &Drug, to: &Drug, meq: f64) -> Vec<String> {
        Self::warnings_for(from, to, meq)
            .iter()
            .map(|w| w.message().to_string())
            .collect()
    }

    fn is_high_risk(drug: &Drug) -> bool {
        HIGH_RISK_DRUG_IDS.contains(&drug.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::find_drug;
    use ConversionWarning::*;

    fn warnings(from: &str, to: &str, meq: f64) -> Vec<ConversionWarning> {
        WarningGenerator::warnings_for(find_drug(from).unwrap(), find_drug(to).unwrap(), meq)
    }

    #[test]
    fn low_dose_plain_conversion_has_two_standing_warnings() {
        assert_eq!(
            warnings("morphine-oral", "oxycodone", 30.0),
            vec![CrossToleranceReduction, AvoidBenzodiazepines]
        );
    }

    #[test]
    fn high_risk_source_or_target_adds_leading_warning() {
        assert_eq!(warnings("fentanyl", "oxycodone", 10.0)[0], HighRiskConversion);
        assert_eq!(warnings("oxycodone", "sufentanil", 10.0)[0], HighRiskConversion);
        assert_eq!(warnings("methadone", "morphine-oral", 10.0)[0], HighRiskConversion);
    }

    #[test]
    fn monitoring_and_cdc_warnings_are_exclusive() {
        let moderate = warnings("morphine-oral", "oxycodone", 50.0);
        assert!(moderate.contains(&IncreasedMonitoring));
        assert!(!moderate.contains(&HighDailyMme));

        let high = warnings("morphine-oral", "oxycodone", 90.0);
        assert!(high.contains(&HighDailyMme));
        assert!(!high.contains(&IncreasedMonitoring));
    }

    #[test]
    fn full_list_is_ordered() {
        assert_eq!(
            warnings("fentanyl", "hydromorphone-oral", 100.0),
            vec![
                HighRiskConversion,
                HighDailyMme,
                CrossToleranceReduction,
                AvoidBenzodiazepines
            ]
        );
    }

    #[test]
    fn messages_match_warning_text() {
        let from = find_drug("morphine-oral").unwrap();
        let to = find_drug("oxycodone").unwrap();
        let messages = WarningGenerator::messages_for(from, to, 60.0);
        assert_eq!(messages[0], "⚠️ Daily MME ≥50: Increased monitoring recommended");
        assert_eq!(
            messages[2],
            "⚠️ Avoid concurrent benzodiazepine prescriptions when possible"
        );
    }
}
