//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod catalog;
pub mod conversion;

pub use catalog::{ListDrugsHandler, ListDrugsQuery};
pub use conversion::{
    CalculateMmeHandler, CalculateMmeQuery, CalculateMmeResult, ConvertDoseCommand,
    ConvertDoseError, ConvertDoseHandler, ConvertDoseResult,
};
