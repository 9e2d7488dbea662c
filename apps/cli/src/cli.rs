use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "kennel")]
#[command(about = "Validate pet and owner records", version)]
pub struct Cli {
    /// Log filter directive (e.g. `debug`, `kennel_validator=trace`)
    #[arg(long, global = true, env = "KENNEL_LOG")]
    pub log_level: Option<String>,

    /// Log output format; defaults to `KENNEL_LOG_FORMAT`, where unknown names mean compact
    #[arg(long, global = true)]
    pub log_format: Option<kennel_log::Format>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate one pet record or an array of them, read as JSON
    Validate {
        /// Input file; stdin when omitted or `-`
        path: Option<PathBuf>,

        /// Report format written to stdout
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Logging configuration: environment first, flags on top.
    pub fn log_config(&self) -> kennel_log::Config {
        let mut config = kennel_log::Config::from_env();
        if let Some(level) = &self.log_level {
            config.level.clone_from(level);
        }
        if let Some(format) = self.log_format {
            config.format = format;
        }
        config
    }
}
