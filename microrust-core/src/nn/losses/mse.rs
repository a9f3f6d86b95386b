use super::{check_pairs, Reduction};
use crate::error::MicroRustError;
use crate::ops::{pow_op, sub_op};
use crate::value::Value;

/// Squared error between predictions and targets: `Σ (p - t)²`, or its mean.
///
/// Targets are plain numbers and enter the graph as constant leaves.
///
/// # Errors
/// `LengthMismatch` if the slices differ in length, `EmptyInput` if both are
/// empty.
pub fn mse_loss(
    predictions: &[Value],
    targets: &[f64],
    reduction: Reduction,
) -> Result<Value, MicroRustError> {
    check_pairs("mse_loss", predictions.len(), targets.len())?;
    let terms = predictions
        .iter()
        .zip(targets.iter())
        .map(|(p, &t)| pow_op(&sub_op(p, &Value::new(t)), 2.0))
        .collect();
    Ok(reduction.reduce(terms))
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
