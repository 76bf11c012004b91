//! Result display configuration

use serde::Deserialize;

/// How results are rendered to the user
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Output format for results
    #[serde(default)]
    pub output: OutputFormat,

    /// Print the medical disclaimer under conversion results
    #[serde(default = "default_show_disclaimer")]
    pub show_disclaimer: bool,
}

/// Output format for results
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            show_disclaimer: default_show_disclaimer(),
        }
    }
}

fn default_show_disclaimer() -> bool {
    true
}
