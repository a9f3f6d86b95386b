use crate::error::MicroRustError;
use crate::value::Value;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Range every freshly built neuron draws its weights and bias from.
pub const DEFAULT_INIT_RANGE: (f64, f64) = (-1.0, 1.0);

fn checked_distribution(low: f64, high: f64) -> Result<Uniform<f64>, MicroRustError> {
    if !(low.is_finite() && high.is_finite()) || low > high {
        return Err(MicroRustError::InvalidConfig(format!(
            "uniform init needs finite bounds with low <= high, got [{}, {}]",
            low, high
        )));
    }
    Ok(Uniform::new_inclusive(low, high))
}

/// Draws one sample uniformly from `[low, high]`.
///
/// The random source is always passed in; seeding it makes initialization
/// reproducible.
///
/// # Errors
/// `InvalidConfig` if a bound is not finite or `low > high`.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> Result<f64, MicroRustError> {
    let dist = checked_distribution(low, high)?;
    Ok(dist.sample(rng))
}

/// Like [`uniform`] but returns a fresh leaf.
pub fn uniform_value<R: Rng + ?Sized>(
    rng: &mut R,
    low: f64,
    high: f64,
) -> Result<Value, MicroRustError> {
    uniform(rng, low, high).map(Value::new)
}

/// Fills `n` fresh leaves from `[low, high]`.
pub fn uniform_values<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    low: f64,
    high: f64,
) -> Result<Vec<Value>, MicroRustError> {
    let dist = checked_distribution(low, high)?;
    Ok((0..n).map(|_| Value::new(dist.sample(rng))).collect())
}

/// One labelled leaf drawn from [`DEFAULT_INIT_RANGE`].
pub(crate) fn default_parameter<R: Rng + ?Sized>(rng: &mut R, label: String) -> Value {
    let (low, high) = DEFAULT_INIT_RANGE;
    let dist = Uniform::new_inclusive(low, high);
    Value::with_label(dist.sample(rng), label)
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
