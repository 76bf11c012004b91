//! The fixed drug catalog.
//!
//! Changing a clinical conversion factor means editing this table, not the
//! conversion algorithms.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::{ConversionKind, DoseUnit, Drug, WarningLevel, METHADONE_BANDS};

/// Identifier of the reference drug (oral morphine, factor 1.0).
pub const REFERENCE_DRUG_ID: &str = "morphine-oral";

static DRUGS: &[Drug] = &[
    Drug {
        id: "morphine-oral",
        name: "Morphine (Oral)",
        display_name: "Morphine",
        route: "Oral",
        unit: DoseUnit::Milligrams,
        conversion: ConversionKind::Standard { factor: 1.0 },
        is_reference: true,
        description: "Reference standard for opioid conversions",
        brand_names: &[],
        note: None,
        warning_level: None,
    },
    Drug {
        id: "hydromorphone-oral",
        name: "Hydromorphone (Oral)",
        display_name: "Hydromorphone",
        route: "Oral",
        unit: DoseUnit::Milligrams,
        conversion: ConversionKind::Standard { factor: 4.0 },
        is_reference: false,
        description: "Oral Hydromorphone to Oral Morphine ratio is 1:4",
        brand_names: &["Dilaudid"],
        note: None,
        warning_level: None,
    },
    Drug {
        id: "hydromorphone-iv",
        name: "Hydromorphone (IV)",
        display_name: "Hydromorphone",
        route: "IV",
        unit: DoseUnit::Milligrams,
        conversion: ConversionKind::Standard { factor: 5.0 },
        is_reference: false,
        description: "IV Hydromorphone to Oral Morphine ratio is 1:5",
        brand_names: &["Dilaudid"],
        note: None,
        warning_level: None,
    },
    Drug {
        id: "kadian",
        name: "Kadian (Morphine SR)",
        display_name: "Kadian",
        route: "Oral",
        unit: DoseUnit::Milligrams,
        conversion: ConversionKind::Standard { factor: 1.0 },
        is_reference: false,
        description: "Morphine Sulfate Extended-Release - 1:1 conversion to Oral Morphine",
        brand_names: &["MS Contin", "M-Eslon"],
        note: None,
        warning_level: None,
    },
    Drug {
        id: "methadone",
        name: "Methadone",
        display_name: "Methadone",
        route: "Oral",
        unit: DoseUnit::Milligrams,
        conversion: ConversionKind::DoseDependent {
            bands: METHADONE_BANDS,
        },
        is_reference: false,
        description: "Uses dose-dependent conversion factor",
        brand_names: &[],
        note: Some(
            "Conversion ratio varies by current methadone dose. Requires clinical judgment.",
        ),
        warning_level: Some(WarningLevel::High),
    },
    Drug {
        id: "fentanyl",
        name: "Fentanyl",
        display_name: "Fentanyl",
        route: "Transdermal/IV",
        unit: DoseUnit::Milligrams,
        conversion: ConversionKind::Standard { factor: 4.0 },
        is_reference: false,
        description: "Fentanyl to Oral Morphine ratio is 1:4",
        brand_names: &[],
        note: Some("For transdermal patches, use mcg/hr dose"),
        warning_level: Some(WarningLevel::High),
    },
    Drug {
        id: "oxycodone",
        name: "Oxycodone",
        display_name: "Oxycodone",
        route: "Oral",
        unit: DoseUnit::Milligrams,
        conversion: ConversionKind::Standard { factor: 1.5 },
        is_reference: false,
        description: "Oxycodone to Oral Morphine ratio is 1:1.5",
        brand_names: &["OxyContin", "OxyNEO"],
        note: None,
        warning_level: None,
    },
    Drug {
        id: "sufentanil",
        name: "Sufentanil",
        display_name: "Sufentanil",
        route: "IV",
        unit: DoseUnit::Micrograms,
        conversion: ConversionKind::Standard { factor: 3.0 },
        is_reference: false,
        description: "1 mcg of Sufentanil is equivalent to 3 mg of Oral Morphine",
        brand_names: &[],
        note: Some("Dose entered in micrograms (μg)"),
        warning_level: Some(WarningLevel::High),
    },
];

static DRUG_INDEX: Lazy<HashMap<&'static str, &'static Drug>> =
    Lazy::new(|| DRUGS.iter().map(|drug| (drug.id, drug)).collect());

/// Looks up a drug by identifier.
pub fn find_drug(drug_id: &str) -> Option<&'static Drug> {
    DRUG_INDEX.get(drug_id).copied()
}

/// Every catalog entry, in display order.
pub fn all_drugs() -> &'static [Drug] {
    DRUGS
}

/// The drug all conversion factors are expressed against.
pub fn reference_drug() -> Option<&'static Drug> {
    find_drug(REFERENCE_DRUG_ID)
}

/// Catalog entries a picker should offer, optionally hiding one drug
/// (typically the already-chosen source).
pub fn selectable_drugs(exclude: Option<&str>) -> Vec<&'static Drug> {
    DRUGS
        .iter()
        .filter(|drug| exclude.map_or(true, |id| drug.id != id))
        .collect()
}
