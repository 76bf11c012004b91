//! Catalog module - static drug and dose-banding tables.
//!
//! # Module Structure
//!
//! - `drug` - Drug records and their conversion kind
//! - `methadone` - Methadone dose-banding table
//! - `registry` - The fixed drug catalog and lookups

mod drug;
mod methadone;
mod registry;

pub use drug::{ConversionKind, DoseUnit, Drug, WarningLevel, DOSE_STEP};
pub use methadone::{band_for_dose, MethadoneBand, METHADONE_BANDS, METHADONE_MIN_DOSE};
pub use registry::{all_drugs, find_drug, reference_drug, selectable_drugs, REFERENCE_DRUG_ID};
