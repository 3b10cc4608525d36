use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default log file, created in the working directory
pub const DEFAULT_LOG_FILE: &str = "calc.log";

/// Default log level when `RUST_LOG` is not set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Calculator run configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CalcConfig {
    pub logging: LoggingConfig,
    pub format: OutputFormat,
}

/// Diagnostic log configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub file: PathBuf,
    pub level: String,
}

/// How a successful calculation is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Operation, numbers and result on three lines
    #[default]
    Text,
    /// A single JSON object
    Json,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: PathBuf::from(DEFAULT_LOG_FILE),
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_config_default() {
        let config = CalcConfig::default();

        assert!(config.logging.enabled);
        assert_eq!(config.logging.file, PathBuf::from("calc.log"));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_config_deserialize() {
        let json = r#"{"logging":{"enabled":false,"file":"/tmp/x.log","level":"debug"},"format":"json"}"#;
        let config: CalcConfig = serde_json::from_str(json).unwrap();

        assert!(!config.logging.enabled);
        assert_eq!(config.logging.file, PathBuf::from("/tmp/x.log"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.format, OutputFormat::Json);
    }
}
