use crate::autograd::BackwardOp;
use crate::value::Value;

/// Hyperbolic tangent.
///
/// Backward is expressed through the output: `a.grad += g * (1 - out^2)`.
pub fn tanh_op(a: &Value) -> Value {
    let data = a.data().tanh();
    Value::from_op(data, BackwardOp::Tanh, vec![a.clone()])
}

impl Value {
    /// See [`tanh_op`].
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
