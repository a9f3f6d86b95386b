use crate::ops::arithmetic::{mul_op, pow_op};
use crate::value::Value;

/// Divides `a` by `b`.
///
/// Built as `a * b^-1` rather than as its own primitive, so its gradient
/// comes from the `mul` and `pow` rules. A zero divisor yields an infinite or
/// NaN result that propagates through the rest of the graph.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_op(b, -1.0))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
