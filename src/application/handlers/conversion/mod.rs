//! Conversion handlers.

mod calculate_mme;
mod convert_dose;

pub use calculate_mme::{CalculateMmeHandler, CalculateMmeQuery, CalculateMmeResult};
pub use convert_dose::{
    ConvertDoseCommand, ConvertDoseError, ConvertDoseHandler, ConvertDoseResult,
};
