use crate::autograd::BackwardOp;
use crate::value::Value;

/// Negates a value.
///
/// Backward: the operand receives the negated output gradient.
pub fn neg_op(a: &Value) -> Value {
    Value::from_op(-a.data(), BackwardOp::Neg, vec![a.clone()])
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
