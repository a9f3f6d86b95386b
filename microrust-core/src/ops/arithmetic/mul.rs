use crate::autograd::BackwardOp;
use crate::value::Value;

// --- Forward Operation ---

/// Multiplies two values.
///
/// Backward: each operand receives the output gradient scaled by the other
/// operand's value (`a.grad += g * b`, `b.grad += g * a`).
pub fn mul_op(a: &Value, b: &Value) -> Value {
    let data = a.data() * b.data();
    Value::from_op(data, BackwardOp::Mul, vec![a.clone(), b.clone()])
}

// --- Tests ---

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
