//! Drug definitions.

use serde::Serialize;
use std::fmt;

use super::MethadoneBand;

/// Input granularity for daily dose entry.
pub const DOSE_STEP: f64 = 0.1;

/// Unit a drug's daily dose is entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DoseUnit {
    #[serde(rename = "mg")]
    Milligrams,
    #[serde(rename = "μg")]
    Micrograms,
}

impl DoseUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            DoseUnit::Milligrams => "mg",
            DoseUnit::Micrograms => "μg",
        }
    }
}

impl fmt::Display for DoseUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Advisory risk flag attached to some catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningLevel {
    High,
}

/// How a drug's dose maps to morphine milligrams.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConversionKind {
    /// Fixed multiplier: 1 unit of drug ≈ `factor` mg oral morphine.
    Standard { factor: f64 },
    /// Multiplier depends on the dose itself (methadone).
    DoseDependent { bands: &'static [MethadoneBand] },
}

/// A supported opioid. Catalog entries are static and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Drug {
    pub id: &'static str,
    pub name: &'static str,
    pub display_name: &'static str,
    pub route: &'static str,
    pub unit: DoseUnit,
    pub conversion: ConversionKind,
    /// True only for oral morphine, the unit every factor is expressed in.
    pub is_reference: bool,
    pub description: &'static str,
    pub brand_names: &'static [&'static str],
    pub note: Option<&'static str>,
    pub warning_level: Option<WarningLevel>,
}

impl Drug {
    /// Fixed conversion factor, or None for dose-dependent drugs.
    pub fn conversion_factor(&self) -> Option<f64> {
        match self.conversion {
            ConversionKind::Standard { factor } => Some(factor),
            ConversionKind::DoseDependent { .. } => None,
        }
    }

    pub fn is_dose_dependent(&self) -> bool {
        matches!(self.conversion, ConversionKind::DoseDependent { .. })
    }

    /// Formula shown next to the drug, e.g. "MEQ = oxycodone × 1.5".
    pub fn formula(&self) -> String {
        let name = self.display_name.to_lowercase();
        match self.conversion {
            ConversionKind::Standard { factor } => format!("MEQ = {} × {}", name, factor),
            ConversionKind::DoseDependent { .. } => format!("MEQ = {} × factor", name),
        }
    }

    /// Smallest daily dose a caller should accept for this drug.
    pub fn minimum_dose(&self) -> f64 {
        match self.conversion {
            ConversionKind::Standard { .. } => DOSE_STEP,
            ConversionKind::DoseDependent { bands } => {
                bands.first().map_or(1.0, |band| band.min_dose)
            }
        }
    }

    /// Picker label: the name followed by brand names when there are any.
    pub fn selector_label(&self) -> String {
        if self.brand_names.is_empty() {
            self.name.to_string()
        } else {
            format!("{} ({})", self.name, self.brand_names.join(", "))
        }
    }
}

impl fmt::Display for Drug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
