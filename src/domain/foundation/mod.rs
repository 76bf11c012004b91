//! Foundation module - Shared domain primitives.
//!
//! Contains the error taxonomy and the rounding helper that every
//! conversion path shares.

mod errors;
mod rounding;

pub use errors::{ConversionError, EngineError, ErrorCode, LookupError, ValidationError};
pub use rounding::round_to_tenth;
