use crate::autograd::BackwardOp;
use crate::value::Value;

/// Subtracts `b` from `a`.
///
/// Backward: `a` receives the output gradient, `b` its negation.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    let data = a.data() - b.data();
    Value::from_op(data, BackwardOp::Sub, vec![a.clone(), b.clone()])
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
