use thiserror::Error;

/// Main error type for the calculator
#[derive(Debug, Error, PartialEq)]
pub enum CalcError {
    #[error("unrecognized operation '{0}' (expected one of: add, subtract, multiply, divide)")]
    UnknownOperation(String),

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("{operation} requires at least one number")]
    EmptyOperands { operation: String },

    #[error("Division by zero is disallowed (operand at index {index} is 0)")]
    DivisionByZero { index: usize },

    #[error("Logging error: {0}")]
    Logging(String),
}

impl CalcError {
    /// True for errors caused by malformed command-line input
    pub fn is_usage_error(&self) -> bool {
        matches!(self, CalcError::UnknownOperation(_) | CalcError::InvalidNumber(_))
    }

    /// Process exit status for this error. Usage errors share clap's code.
    pub fn exit_code(&self) -> i32 {
        if self.is_usage_error() {
            2
        } else {
            1
        }
    }
}

/// Result type alias for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;
