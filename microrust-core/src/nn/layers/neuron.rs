use crate::error::MicroRustError;
use crate::nn::init::default_parameter;
use crate::nn::module::Module;
use crate::ops::{add_op, mul_op, tanh_op};
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// A single tanh unit: `tanh(b + Σ xᵢ·wᵢ)`.
///
/// Weights and bias are leaves owned by the neuron, so every forward pass
/// builds a fresh expression on top of the same parameter nodes.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
}

impl Neuron {
    /// Creates a neuron with `n_in` weights and a bias, all drawn uniformly
    /// from [-1, 1] and labelled `w0..w{n_in-1}` and `b`.
    pub fn new<R: Rng + ?Sized>(n_in: usize, rng: &mut R) -> Self {
        let weights = (0..n_in)
            .map(|i| default_parameter(&mut *rng, format!("w{}", i)))
            .collect();
        let bias = default_parameter(&mut *rng, "b".to_string());
        Neuron { weights, bias }
    }

    /// Builds a neuron around existing parameter values.
    pub fn from_parameters(weights: Vec<Value>, bias: Value) -> Self {
        Neuron { weights, bias }
    }

    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    /// Computes the activation for one input vector.
    ///
    /// # Errors
    /// `InputSizeMismatch` if `x` does not have one entry per weight.
    pub fn call(&self, x: &[Value]) -> Result<Value, MicroRustError> {
        if x.len() != self.weights.len() {
            return Err(MicroRustError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: x.len(),
            });
        }
        let act = x
            .iter()
            .zip(self.weights.iter())
            .fold(self.bias.clone(), |acc, (xi, wi)| add_op(&acc, &mul_op(xi, wi)));
        Ok(tanh_op(&act))
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, MicroRustError> {
        Ok(vec![self.call(inputs)?])
    }

    /// Weights in order, then the bias.
    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut named: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w{}", i), w.clone()))
            .collect();
        named.push(("b".to_string(), self.bias.clone()));
        named
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TanhNeuron({})", self.weights.len())
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
