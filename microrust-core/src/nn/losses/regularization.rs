use crate::value::Value;

/// L2 penalty `alpha · Σ p²` over a set of parameters.
///
/// An empty parameter list gives a constant zero.
pub fn l2_regularization(params: &[Value], alpha: f64) -> Value {
    let squares: Value = params.iter().map(|p| p * p).sum();
    squares * alpha
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_l2_value_and_grad() {
        let params = vec![Value::new(1.0), Value::new(-2.0)];
        let reg = l2_regularization(&params, 1e-4);
        assert_relative_eq!(reg.data(), 5e-4, epsilon = 1e-15);
        reg.backward();
        assert_relative_eq!(params[0].grad(), 2e-4, epsilon = 1e-15);
        assert_relative_eq!(params[1].grad(), -4e-4, epsilon = 1e-15);
    }

    #[test]
    fn test_l2_empty() {
        let reg = l2_regularization(&[], 0.5);
        assert_eq!(reg.data(), 0.0);
    }
}
