use crate::autograd::BackwardOp;
use crate::value::Value;

// --- Forward Operation ---

/// Applies the Rectified Linear Unit: `max(0, x)`.
///
/// Backward: the gradient passes through where the output is positive and is
/// dropped elsewhere (the derivative at exactly 0 is taken as 0).
pub fn relu_op(a: &Value) -> Value {
    let data = a.data().max(0.0);
    Value::from_op(data, BackwardOp::Relu, vec![a.clone()])
}

impl Value {
    /// See [`relu_op`].
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

// --- Tests ---

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
