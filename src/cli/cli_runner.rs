use clap::Parser;
use tracing::{error, info};

use crate::cli::{CliArgs, OutputFormatter};
use crate::engine::dispatch;
use crate::utils::config::CalcConfig;
use crate::utils::error::CalcResult;
use crate::utils::logging;

/// Main CLI runner that handles command execution
pub struct CliRunner {
    config: CalcConfig,
}

impl CliRunner {
    pub fn new(config: CalcConfig) -> Self {
        Self { config }
    }

    /// Run the parsed command and return the formatted output
    pub fn execute(&self, args: &CliArgs) -> CalcResult<String> {
        let calc = dispatch(args.operation, args.numbers.clone())?;
        Ok(OutputFormatter::format_result(&calc, &self.config.format))
    }
}

/// Main entry point for CLI execution
pub fn run_cli() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let config = args.to_config();

    if let Err(e) = logging::init_with_config(&config.logging) {
        eprintln!("{}", OutputFormatter::format_warning(&e.to_string()));
    }
    info!("Program start.");
    info!("Parser ready.");
    info!("Arguments parsed.");

    let runner = CliRunner::new(config);
    match runner.execute(&args) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", OutputFormatter::format_error(&e));
            std::process::exit(e.exit_code());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::config::OutputFormat;
    use crate::utils::error::CalcError;

    fn runner(format: OutputFormat) -> CliRunner {
        CliRunner::new(CalcConfig {
            format,
            ..CalcConfig::default()
        })
    }

    fn args(argv: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("clicalc").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_execute_text() {
        let output = runner(OutputFormat::Text)
            .execute(&args(&["subtract", "10", "2"]))
            .unwrap();

        assert_eq!(output, "Operation: subtract\nNumbers: [10.0, 2.0]\nResult: 8.0");
    }

    #[test]
    fn test_execute_json() {
        let output = runner(OutputFormat::Json)
            .execute(&args(&["multiply", "1", "2", "3"]))
            .unwrap();

        assert!(output.contains("\"operation\": \"multiply\""));
        assert!(output.contains("\"result\": 6.0"));
    }

    #[test]
    fn test_execute_division_by_zero() {
        let result = runner(OutputFormat::Text).execute(&args(&["divide", "10", "0"]));
        assert_eq!(result, Err(CalcError::DivisionByZero { index: 1 }));
    }

    #[test]
    fn test_execute_empty_subtract() {
        let result = runner(OutputFormat::Text).execute(&args(&["subtract"]));
        assert!(matches!(result, Err(CalcError::EmptyOperands { .. })));
    }
}
