//! Arithmetic over an ordered list of operands.

use tracing::{debug, error};

use crate::utils::error::{CalcError, CalcResult};

/// Sum of all numbers. An empty list sums to 0.
pub fn add(numbers: &[f64]) -> f64 {
    debug!("Performing addition.");
    sum(numbers)
}

/// First number minus the sum of the rest.
pub fn subtract(numbers: &[f64]) -> CalcResult<f64> {
    debug!("Performing subtraction.");
    let (first, rest) = split_first(numbers, "subtract")?;
    Ok(first - sum(rest))
}

/// Product of all numbers. An empty list multiplies to 1.
pub fn multiply(numbers: &[f64]) -> f64 {
    debug!("Performing multiplication.");
    numbers.iter().product()
}

/// First number divided by each of the rest, left to right.
///
/// Every divisor is checked before dividing, so a zero anywhere after the
/// first operand fails with [`CalcError::DivisionByZero`].
pub fn divide(numbers: &[f64]) -> CalcResult<f64> {
    debug!("Performing division.");
    let (first, rest) = split_first(numbers, "divide")?;

    let mut result = first;
    for (offset, &divisor) in rest.iter().enumerate() {
        if divisor == 0.0 {
            error!("Division by zero.");
            return Err(CalcError::DivisionByZero { index: offset + 1 });
        }
        result /= divisor;
    }
    Ok(result)
}

// `Iterator::sum` for floats starts from -0.0, so fold from +0.0 instead.
fn sum(numbers: &[f64]) -> f64 {
    numbers.iter().fold(0.0, |acc, x| acc + x)
}

fn split_first<'a>(numbers: &'a [f64], operation: &str) -> CalcResult<(f64, &'a [f64])> {
    match numbers.split_first() {
        Some((&first, rest)) => Ok((first, rest)),
        None => Err(CalcError::EmptyOperands {
            operation: operation.to_string(),
        }),
    }
}
