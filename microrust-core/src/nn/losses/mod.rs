// src/nn/losses/mod.rs
// Scalar losses over predictions and regularization penalties.

pub mod hinge;
pub mod mse;
pub mod regularization;

pub use hinge::{accuracy, hinge_loss};
pub use mse::mse_loss;
pub use regularization::l2_regularization;

use crate::error::MicroRustError;
use crate::value::Value;
use std::str::FromStr;

/// Specifies the reduction to apply to the per-sample terms:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = MicroRustError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(MicroRustError::InvalidConfig(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

impl Reduction {
    /// Folds per-sample loss terms into one scalar node.
    pub(crate) fn reduce(&self, terms: Vec<Value>) -> Value {
        let n = terms.len();
        let total: Value = terms.into_iter().sum();
        match self {
            Reduction::Sum => total,
            Reduction::Mean => total * (1.0 / n as f64),
        }
    }
}

/// Shared argument validation for the per-sample losses.
pub(crate) fn check_pairs(
    operation: &str,
    predictions: usize,
    targets: usize,
) -> Result<(), MicroRustError> {
    if predictions != targets {
        return Err(MicroRustError::LengthMismatch {
            operation: operation.to_string(),
            left: predictions,
            right: targets,
        });
    }
    if predictions == 0 {
        return Err(MicroRustError::EmptyInput {
            operation: operation.to_string(),
        });
    }
    Ok(())
}
