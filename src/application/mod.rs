//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer runs the caller-side flow around the engine: validate, then
//! convert, then attach the safety advisory.

pub mod handlers;

pub use handlers::{
    CalculateMmeHandler, CalculateMmeQuery, CalculateMmeResult, ConvertDoseCommand,
    ConvertDoseError, ConvertDoseHandler, ConvertDoseResult, ListDrugsHandler, ListDrugsQuery,
};
