//! CalculateMmeHandler - computes the daily MME of a single regimen.

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::conversion::{MmeCalculator, MmeResult};
use crate::domain::foundation::EngineError;
use crate::domain::safety::SafetyLevel;

/// Query for the MME of one drug at one daily dose.
#[derive(Debug, Clone)]
pub struct CalculateMmeQuery {
    pub drug_id: String,
    pub dose: f64,
}

/// MME with the safety tier it falls into.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculateMmeResult {
    pub mme: MmeResult,
    pub safety_level: SafetyLevel,
}

/// Handler for MME calculations.
#[derive(Debug, Default)]
pub struct CalculateMmeHandler;

impl CalculateMmeHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: CalculateMmeQuery) -> Result<CalculateMmeResult, EngineError> {
        let mme = MmeCalculator::calculate(&query.drug_id, query.dose).map_err(|err| {
            warn!(drug = %query.drug_id, code = %err.code(), "MME calculation failed");
            err
        })?;

        let safety_level = SafetyLevel::for_meq(mme.meq);
        debug!(drug = mme.drug.id, meq = mme.meq, tier = ?safety_level.tier, "MME calculated");

        Ok(CalculateMmeResult { mme, safety_level })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::safety::RiskTier;

    #[test]
    fn fentanyl_25_is_high_risk() {
        let result = CalculateMmeHandler::new()
            .handle(CalculateMmeQuery {
                drug_id: "fentanyl".into(),
                dose: 25.0,
            })
            .unwrap();

        assert_eq!(result.mme.meq, 100.0);
        assert_eq!(result.safety_level.tier, RiskTier::High);
    }

    #[test]
    fn errors_are_returned_not_raised() {
        let err = CalculateMmeHandler::new()
            .handle(CalculateMmeQuery {
                drug_id: "morphine-oral".into(),
                dose: -1.0,
            })
            .unwrap_err();
        assert_eq!(err.to_string(), "Dose must be greater than 0");
    }
}
