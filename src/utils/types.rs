use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::CalcError;

/// Arithmetic operations supported by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations in canonical order
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Command-line name of the operation
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    /// Exact, case-sensitive match on the operation name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| CalcError::UnknownOperation(s.to_string()))
    }
}

/// Outcome of a single calculator invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    pub operation: Operation,
    pub numbers: Vec<f64>,
    pub result: f64,
}

impl Calculation {
    pub fn new(operation: Operation, numbers: Vec<f64>, result: f64) -> Self {
        Self {
            operation,
            numbers,
            result,
        }
    }
}
