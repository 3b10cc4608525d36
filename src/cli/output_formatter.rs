use colored::*;
use serde_json::json;

use crate::utils::config::OutputFormat;
use crate::utils::error::CalcError;
use crate::utils::types::Calculation;

/// Formats calculation results for CLI output
pub struct OutputFormatter;

impl OutputFormatter {
    /// Format a calculation according to the specified format
    pub fn format_result(calc: &Calculation, format: &OutputFormat) -> String {
        match format {
            OutputFormat::Text => Self::format_text(calc),
            OutputFormat::Json => Self::format_json(calc),
        }
    }

    fn format_text(calc: &Calculation) -> String {
        format!(
            "Operation: {}\nNumbers: {}\nResult: {}",
            calc.operation,
            Self::format_list(&calc.numbers),
            Self::format_number(calc.result)
        )
    }

    fn format_json(calc: &Calculation) -> String {
        let output = serde_json::to_value(calc).unwrap_or_else(|_| json!({}));
        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }

    /// Render a list literal such as `[1.0, 2.5]`
    pub fn format_list(numbers: &[f64]) -> String {
        let items: Vec<String> = numbers.iter().map(|n| Self::format_number(*n)).collect();
        format!("[{}]", items.join(", "))
    }

    /// Render one number, keeping `.0` on integral values
    pub fn format_number(value: f64) -> String {
        if value.is_nan() {
            "nan".to_string()
        } else {
            format!("{:?}", value)
        }
    }

    /// Format error message for CLI display
    pub fn format_error(error: &CalcError) -> String {
        format!("{} {}", "Error:".red().bold(), error.to_string().red())
    }

    /// Format warning message for CLI display
    pub fn format_warning(message: &str) -> String {
        format!("{} {}", "Warning:".yellow().bold(), message)
    }
}
