use super::*;
use crate::autograd::grad_check::check_grad;
use crate::utils::testing::sample_inputs;
use approx::assert_relative_eq;

#[test]
fn test_pow_forward() {
    let b = Value::new(2.0);
    let c = b.pow(3.0);
    assert_relative_eq!(c.data(), 8.0);
    assert_eq!(c.op(), "pow");
    assert_eq!(c.backward_op(), BackwardOp::Pow { exponent: 3.0 });
}

#[test]
fn test_pow_backward() {
    let b = Value::new(2.0);
    let c = b.pow(3.0);
    c.backward();
    assert_relative_eq!(b.grad(), 12.0);
}

#[test]
fn test_pow_fractional_exponent() {
    let b = Value::new(4.0);
    let c = b.pow(0.5);
    assert_relative_eq!(c.data(), 2.0);
    c.backward();
    assert_relative_eq!(b.grad(), 0.25);
}

#[test]
fn test_pow_negative_base_fractional_exponent_is_nan() {
    let b = Value::new(-4.0);
    let c = b.pow(0.5);
    assert!(c.data().is_nan());
    c.backward();
    assert!(b.grad().is_nan());
}

#[test]
fn test_pow_integer_exponent_negative_base() {
    let b = Value::new(-2.0);
    let c = b.pow(3.0);
    assert_relative_eq!(c.data(), -8.0);
    c.backward();
    assert_relative_eq!(b.grad(), 12.0);
}

#[test]
fn test_pow_grad_check() {
    for (x, _) in sample_inputs(20, 0.2, 3.0) {
        for k in [-2.0, -1.0, 0.5, 2.0, 3.0] {
            check_grad(|v| pow_op(&v[0], k), &[x], 1e-6, 1e-4)
                .unwrap_or_else(|e| panic!("pow grad check failed at x={}, k={}: {}", x, k, e));
        }
    }
}
