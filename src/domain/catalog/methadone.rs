//! Methadone dose-banding table.
//!
//! Methadone's morphine equivalence rises with the daily dose, so the
//! conversion factor is looked up per band instead of being fixed.

use serde::Serialize;

/// One row of the banding table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MethadoneBand {
    /// Lowest daily dose (mg) listed for the band.
    pub min_dose: f64,
    /// Highest daily dose (mg) for the band. None = unbounded.
    pub max_dose: Option<f64>,
    /// Multiplier from methadone mg to morphine mg.
    pub factor: f64,
}

/// Daily methadone dose bands, ascending and contiguous.
///
/// | Dose (mg) | Factor |
/// |-----------|--------|
/// | 1-20      | 4      |
/// | 21-40     | 8      |
/// | 41-60     | 10     |
/// | 61-80     | 12     |
/// | 81+       | 15     |
pub const METHADONE_BANDS: &[MethadoneBand] = &[
    MethadoneBand { min_dose: 1.0, max_dose: Some(20.0), factor: 4.0 },
    MethadoneBand { min_dose: 21.0, max_dose: Some(40.0), factor: 8.0 },
    MethadoneBand { min_dose: 41.0, max_dose: Some(60.0), factor: 10.0 },
    MethadoneBand { min_dose: 61.0, max_dose: Some(80.0), factor: 12.0 },
    MethadoneBand { min_dose: 81.0, max_dose: None, factor: 15.0 },
];

/// Smallest methadone dose the table covers.
pub const METHADONE_MIN_DOSE: f64 = 1.0;

impl MethadoneBand {
    /// Human-readable range, e.g. "41-60 mg" or "81-∞ mg".
    pub fn dose_range(&self) -> String {
        match self.max_dose {
            Some(max) => format!("{}-{} mg", self.min_dose, max),
            None => format!("{}-∞ mg", self.min_dose),
        }
    }

    fn covers_up_to(&self, dose: f64) -> bool {
        self.max_dose.map_or(true, |max| dose <= max)
    }
}

/// Finds the band for a daily dose.
///
/// Bands are scanned in ascending order and the first whose upper bound is
/// not below the dose wins, so fractional doses between listed bounds
/// (e.g. 20.5 mg) fall into the next band up. Doses under the first band's
/// minimum have no band.
pub fn band_for_dose(bands: &[MethadoneBand], dose: f64) -> Option<&MethadoneBand> {
    let first = bands.first()?;
    if dose.is_nan() || dose < first.min_dose {
        return None;
    }
    bands.iter().find(|band| band.covers_up_to(dose))
}
