use tracing::info;

use crate::engine::operations;
use crate::utils::error::CalcResult;
use crate::utils::types::{Calculation, Operation};

impl Operation {
    /// Apply this operation to `numbers`
    pub fn apply(&self, numbers: &[f64]) -> CalcResult<f64> {
        match self {
            Operation::Add => Ok(operations::add(numbers)),
            Operation::Subtract => operations::subtract(numbers),
            Operation::Multiply => Ok(operations::multiply(numbers)),
            Operation::Divide => operations::divide(numbers),
        }
    }
}

/// Run `operation` over `numbers` and record the outcome
pub fn dispatch(operation: Operation, numbers: Vec<f64>) -> CalcResult<Calculation> {
    let result = operation.apply(&numbers)?;
    info!("Operation done.");
    Ok(Calculation::new(operation, numbers, result))
}
