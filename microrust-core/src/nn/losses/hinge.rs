use super::{check_pairs, Reduction};
use crate::error::MicroRustError;
use crate::value::Value;

/// Max-margin loss for labels in {-1, +1}: `relu(1 - y·s)` per sample.
///
/// A sample scored on the right side of the margin contributes nothing, and
/// neither does its gradient.
///
/// # Errors
/// `LengthMismatch` if the slices differ in length, `EmptyInput` if both are
/// empty.
pub fn hinge_loss(
    scores: &[Value],
    labels: &[f64],
    reduction: Reduction,
) -> Result<Value, MicroRustError> {
    check_pairs("hinge_loss", scores.len(), labels.len())?;
    let terms = scores
        .iter()
        .zip(labels.iter())
        .map(|(s, &y)| (1.0 - s * y).relu())
        .collect();
    Ok(reduction.reduce(terms))
}

/// Fraction of samples whose score has the same sign as the label.
pub fn accuracy(scores: &[Value], labels: &[f64]) -> Result<f64, MicroRustError> {
    check_pairs("accuracy", scores.len(), labels.len())?;
    let correct = scores
        .iter()
        .zip(labels.iter())
        .filter(|&(s, &y)| (s.data() > 0.0) == (y > 0.0))
        .count();
    Ok(correct as f64 / scores.len() as f64)
}
