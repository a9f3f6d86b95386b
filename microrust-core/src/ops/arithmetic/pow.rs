// microrust-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::value::Value;

// --- Forward Operation ---

/// Raises `base` to a constant real `exponent`.
///
/// The exponent is not a graph node and receives no gradient.
/// Backward: `base.grad += g * k * base^(k-1)`.
///
/// A negative base with a non-integer exponent yields NaN, as `f64::powf`
/// does.
pub fn pow_op(base: &Value, exponent: f64) -> Value {
    let data = base.data().powf(exponent);
    Value::from_op(data, BackwardOp::Pow { exponent }, vec![base.clone()])
}

// --- Value Method ---

impl Value {
    /// See [`pow_op`].
    pub fn pow(&self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }
}

// --- Tests ---

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
