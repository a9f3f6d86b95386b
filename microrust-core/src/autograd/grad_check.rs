use crate::value::Value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: f(x+h): {loss_plus:?}, f(x-h): {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Gradient check needs a positive finite epsilon, got {0}")]
    InvalidEpsilon(f64),
}

/// Checks reverse-pass gradients against central finite differences.
///
/// `func` builds a scalar expression from one leaf per entry of `inputs`.
/// The analytical gradient comes from one `backward()` over a graph built at
/// `inputs`; the numerical one is `(f(x + h) - f(x - h)) / 2h`, each side
/// evaluated on a freshly built graph. Gradients agree if they are within
/// `tolerance` either absolutely or relative to the larger magnitude.
///
/// # Arguments
/// * `func`: builds the expression; must be deterministic.
/// * `inputs`: the point at which to differentiate.
/// * `epsilon`: finite-difference step `h`.
/// * `tolerance`: accepted absolute/relative difference.
///
/// # Returns
/// The analytical gradients on success.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<Vec<f64>, GradCheckError>
where
    F: Fn(&[Value]) -> Value,
{
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(GradCheckError::InvalidEpsilon(epsilon));
    }

    // --- 1. Analytical gradients from one reverse pass ---
    let leaves: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves);
    output.backward();
    let analytical: Vec<f64> = leaves.iter().map(Value::grad).collect();

    // --- 2. Central differences, one input at a time ---
    let evaluate = |index: usize, x: f64| -> f64 {
        let perturbed: Vec<Value> = inputs
            .iter()
            .enumerate()
            .map(|(i, &v)| Value::new(if i == index { x } else { v }))
            .collect();
        func(&perturbed).data()
    };

    for (i, (&x, &analytical_grad)) in inputs.iter().zip(analytical.iter()).enumerate() {
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let loss_plus = evaluate(i, x + epsilon);
        let loss_minus = evaluate(i, x - epsilon);
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    log::debug!("check_grad: {} inputs within tolerance {}", inputs.len(), tolerance);
    Ok(analytical)
}
