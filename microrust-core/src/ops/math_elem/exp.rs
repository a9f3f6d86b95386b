use crate::autograd::BackwardOp;
use crate::value::Value;

/// Natural exponential `e^x`.
///
/// Backward reuses the output: `a.grad += g * out`.
pub fn exp_op(a: &Value) -> Value {
    let data = a.data().exp();
    Value::from_op(data, BackwardOp::Exp, vec![a.clone()])
}

impl Value {
    /// See [`exp_op`].
    pub fn exp(&self) -> Value {
        exp_op(self)
    }
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
