//! Domain layer containing the conversion rules and their static tables.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (error taxonomy, rounding)
//! - `catalog` - Drug catalog and methadone dose bands
//! - `safety` - MME risk tiers and advisory
//! - `conversion` - MME calculator, converter, warnings, validator

pub mod catalog;
pub mod conversion;
pub mod foundation;
pub mod safety;
