//! Adapters - Presentation shells around the application layer.
//!
//! - `cli` - Command-line interface with text and JSON output

pub mod cli;
