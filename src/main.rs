//! Opioid MME command-line tool.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use opioid_mme::adapters::cli::{self, Cli};
use opioid_mme::config::AppConfig;
use opioid_mme::telemetry;

fn main() -> anyhow::Result<ExitCode> {
    let args = Cli::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    telemetry::init_tracing(&config.logging, args.verbose);

    let output = cli::run(args, &config).context("Failed to render output")?;
    print!("{}", output.text);

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
