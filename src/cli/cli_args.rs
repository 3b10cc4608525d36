use clap::Parser;
use std::path::PathBuf;

use crate::utils::config::{CalcConfig, LoggingConfig, OutputFormat, DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL};
use crate::utils::error::CalcError;
use crate::utils::types::Operation;

/// CLICalc - command-line calculator
#[derive(Parser, Debug)]
#[command(name = "clicalc")]
#[command(about = "CLI calculator app.")]
#[command(version)]
pub struct CliArgs {
    /// Operation to perform: add, subtract, multiply or divide
    #[arg(value_name = "OPERATION", value_parser = parse_operation)]
    pub operation: Operation,

    /// Numbers to operate on
    #[arg(value_name = "NUMBERS", value_parser = parse_number, allow_negative_numbers = true)]
    pub numbers: Vec<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Diagnostic log file, truncated on every run
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Diagnostic log level; RUST_LOG takes precedence
    #[arg(long, value_name = "LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Do not write a diagnostic log
    #[arg(long)]
    pub no_log: bool,
}

impl CliArgs {
    /// Run configuration derived from the command-line flags
    pub fn to_config(&self) -> CalcConfig {
        CalcConfig {
            logging: LoggingConfig {
                enabled: !self.no_log,
                file: self.log_file.clone(),
                level: self.log_level.clone(),
            },
            format: self.format,
        }
    }
}

/// Parse the operation selector
pub fn parse_operation(value: &str) -> Result<Operation, CalcError> {
    value.parse()
}

/// Parse one operand as a floating-point literal
pub fn parse_number(value: &str) -> Result<f64, CalcError> {
    value
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidNumber(value.to_string()))
}
