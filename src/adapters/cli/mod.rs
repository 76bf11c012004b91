//! Command-line presentation shell.
//!
//! Parses arguments, calls the application handlers and renders their
//! results. Holds no state between invocations.

mod args;
mod dto;
mod render;

pub use args::{Cli, Command, FormatArg};
pub use dto::{DrugSummary, ErrorResponse};
pub use render::Renderer;

use crate::application::{
    CalculateMmeHandler, CalculateMmeQuery, ConvertDoseCommand, ConvertDoseError,
    ConvertDoseHandler, ListDrugsHandler, ListDrugsQuery,
};
use crate::config::AppConfig;
use crate::domain::safety::SafetyLevel;

/// Rendered output of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOutput {
    pub text: String,
    /// False when the command reported a validation or engine error.
    pub success: bool,
}

impl CliOutput {
    fn ok(text: String) -> Self {
        Self { text, success: true }
    }

    fn failed(text: String) -> Self {
        Self {
            text,
            success: false,
        }
    }
}

/// Runs a parsed command against the engine.
pub fn run(cli: Cli, config: &AppConfig) -> Result<CliOutput, serde_json::Error> {
    let format = cli.format.map(Into::into).unwrap_or(config.display.output);
    let renderer = Renderer::new(format, config.display.show_disclaimer);

    let output = match cli.command {
        Command::Drugs { exclude } => {
            let drugs = ListDrugsHandler::new().handle(ListDrugsQuery { exclude });
            CliOutput::ok(renderer.drugs(&drugs)?)
        }

        Command::Mme { drug, dose } => {
            match CalculateMmeHandler::new().handle(CalculateMmeQuery { drug_id: drug, dose }) {
                Ok(result) => CliOutput::ok(renderer.mme(&result)?),
                Err(err) => CliOutput::failed(renderer.error(&err)?),
            }
        }

        Command::Convert { from, to, dose } => {
            let cmd = ConvertDoseCommand {
                from_drug_id: from,
                to_drug_id: to,
                dose,
            };
            match ConvertDoseHandler::new().handle(cmd) {
                Ok(result) => CliOutput::ok(renderer.conversion(&result)?),
                Err(ConvertDoseError::Invalid(report)) => {
                    CliOutput::failed(renderer.invalid(&report)?)
                }
                Err(ConvertDoseError::Engine(err)) => CliOutput::failed(renderer.error(&err)?),
            }
        }

        Command::Tier { meq } => CliOutput::ok(renderer.safety_level(&SafetyLevel::for_meq(meq))?),
    };

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn run_args(args: &[&str]) -> CliOutput {
        let cli = Cli::try_parse_from(args).unwrap();
        run(cli, &AppConfig::default()).unwrap()
    }

    #[test]
    fn convert_succeeds() {
        let output = run_args(&["opioid-mme", "convert", "morphine-oral", "oxycodone", "30"]);
        assert!(output.success);
        assert!(output.text.contains("Oxycodone"));
    }

    #[test]
    fn convert_to_methadone_fails_with_meq() {
        let output = run_args(&["opioid-mme", "-f", "json", "convert", "oxycodone", "methadone", "20"]);
        assert!(!output.success);

        let value: serde_json::Value = serde_json::from_str(&output.text).unwrap();
        assert_eq!(value["code"], "CONVERSION_REFUSED");
        assert_eq!(value["meq"], 30.0);
    }

    #[test]
    fn convert_without_dose_reports_validation_error() {
        let output = run_args(&["opioid-mme", "-f", "json", "convert", "oxycodone", "fentanyl"]);
        assert!(!output.success);

        let value: serde_json::Value = serde_json::from_str(&output.text).unwrap();
        assert_eq!(value["is_valid"], false);
        assert_eq!(value["errors"][0], "Dose must be greater than 0");
    }

    #[test]
    fn mme_unknown_drug_fails() {
        let output = run_args(&["opioid-mme", "mme", "heroin", "10"]);
        assert!(!output.success);
        assert!(output.text.contains("Drug not found"));
    }

    #[test]
    fn drugs_listing_honours_exclude() {
        let output = run_args(&["opioid-mme", "drugs", "--exclude", "fentanyl"]);
        assert!(output.success);
        assert!(!output.text.contains("fentanyl"));
        assert!(output.text.contains("sufentanil"));
    }

    #[test]
    fn config_output_format_is_default() {
        let mut config = AppConfig::default();
        config.display.output = crate::config::OutputFormat::Json;

        let cli = Cli::try_parse_from(["opioid-mme", "tier", "30"]).unwrap();
        let output = run(cli, &config).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output.text).unwrap();
        assert_eq!(value["tier"], "low");
    }
}
