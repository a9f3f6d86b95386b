// microrust-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::value::Value;

// --- Forward Operation ---

/// Adds two values.
///
/// Backward: both operands receive the output gradient unchanged.
pub fn add_op(a: &Value, b: &Value) -> Value {
    let data = a.data() + b.data();
    Value::from_op(data, BackwardOp::Add, vec![a.clone(), b.clone()])
}

// --- Tests ---

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
