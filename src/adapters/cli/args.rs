//! Command-line arguments.

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "opioid-mme")]
#[command(version, about = "Opioid rotation and morphine milligram equivalent calculator", long_about = None)]
pub struct Cli {
    /// Output format (overrides configuration)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List supported drugs
    Drugs {
        /// Leave this drug out of the listing
        #[arg(short, long)]
        exclude: Option<String>,
    },

    /// Calculate the daily MME of one drug
    Mme {
        /// Drug ID (e.g. oxycodone, methadone)
        drug: String,

        /// Daily dose in the drug's unit
        #[arg(allow_negative_numbers = true)]
        dose: f64,
    },

    /// Convert a daily dose from one drug to another
    Convert {
        /// Current drug ID
        from: String,

        /// Target drug ID
        to: String,

        /// Current daily dose in the source drug's unit
        #[arg(allow_negative_numbers = true)]
        dose: Option<f64>,
    },

    /// Show the safety tier for a daily MME
    Tier {
        /// Daily MME
        #[arg(allow_negative_numbers = true)]
        meq: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}
