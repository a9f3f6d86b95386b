use crate::value::Value;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};

/// Seed used by every randomized test so failures are reproducible.
pub const TEST_SEED: u64 = 0x5eed;

/// Checks that a value's data and gradient are within `tolerance` of the
/// expected ones. Panics with both numbers otherwise.
pub fn check_value_near(actual: &Value, expected_data: f64, expected_grad: f64, tolerance: f64) {
    let data = actual.data();
    if (data - expected_data).abs() > tolerance {
        panic!(
            "Data mismatch: actual={:?}, expected={:?}, tolerance={:?}",
            data, expected_data, tolerance
        );
    }
    let grad = actual.grad();
    if (grad - expected_grad).abs() > tolerance {
        panic!(
            "Grad mismatch: actual={:?}, expected={:?}, tolerance={:?}",
            grad, expected_grad, tolerance
        );
    }
}

/// Draws `n` reproducible `(x, y)` pairs uniformly from `[low, high)`.
pub fn sample_inputs(n: usize, low: f64, high: f64) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(TEST_SEED);
    let dist = Uniform::new(low, high);
    (0..n)
        .map(|_| (dist.sample(&mut rng), dist.sample(&mut rng)))
        .collect()
}
