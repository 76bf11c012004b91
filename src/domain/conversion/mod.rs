//! Conversion module - the MME engine.
//!
//! # Components
//!
//! - `MmeCalculator` - (drug, dose) → MME, banding methadone by dose
//! - `DrugConverter` - MME → target dose with reductions, breakthrough range,
//!   safety tier and warnings
//! - `WarningGenerator` - ordered conversion warnings
//! - `ConversionValidator` - accumulates every input problem at once
//!
//! All functions are pure and stateless; the only shared data is the static
//! catalog.

mod converter;
mod mme_calculator;
mod validator;
mod warnings;

pub use converter::{BreakthroughRange, ConversionResult, DrugConverter};
pub use mme_calculator::{MethadoneDetail, MmeCalculator, MmeResult, METHADONE_WARNING};
pub use validator::{ConversionValidator, ValidationReport};
pub use warnings::{ConversionWarning, WarningGenerator, HIGH_RISK_DRUG_IDS};
