//! Opioid MME - Morphine milligram equivalent engine
//!
//! This crate converts a patient's daily opioid dose to morphine milligram
//! equivalents and from there to an alternative opioid, with cross-tolerance
//! reductions, breakthrough dosing, safety tiers and warnings.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod telemetry;
