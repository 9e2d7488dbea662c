mod cli;
mod report;

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::{Cli, Command, OutputFormat};
use crate::report::{Document, RecordReport};

const EXIT_INVALID: u8 = 1;
const EXIT_INPUT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut log_config = cli.log_config();
    log_config.colors &= io::stderr().is_terminal();
    if let Err(e) = kennel_log::LoggerBuilder::from_config(log_config).build() {
        eprintln!("error: {e}");
        return ExitCode::from(EXIT_INPUT_ERROR);
    }

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_INVALID),
        Err(e) => {
            let message = format!("{e:#}");
            tracing::error!(error = %message, "validation aborted");
            eprintln!("error: {message}");
            ExitCode::from(EXIT_INPUT_ERROR)
        }
    }
}

/// Returns whether every record was valid.
fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Command::Validate { path, output } => validate(path.as_deref(), output),
    }
}

fn validate(path: Option<&Path>, output: OutputFormat) -> Result<bool> {
    let input = read_input(path)?;
    let records = Document::parse(&input)?.into_records();
    tracing::debug!(records = records.len(), "parsed input");

    let reports: Vec<_> = records
        .iter()
        .enumerate()
        .map(|(index, record)| RecordReport::new(index, record))
        .collect();

    let invalid = reports.iter().filter(|r| !r.valid).count();
    tracing::info!(records = reports.len(), invalid, "validation finished");

    let stdout = io::stdout();
    report::write_reports(&mut stdout.lock(), &reports, output)
        .context("failed to write report")?;

    Ok(invalid == 0)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
