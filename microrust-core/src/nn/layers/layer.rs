use super::neuron::Neuron;
use crate::error::MicroRustError;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// A fully connected layer: `n_out` independent neurons reading the same
/// `n_in` inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    in_features: usize,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(n_in: usize, n_out: usize, rng: &mut R) -> Self {
        let neurons = (0..n_out).map(|_| Neuron::new(n_in, &mut *rng)).collect();
        Layer {
            neurons,
            in_features: n_in,
        }
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    /// One output per neuron, in neuron order.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, MicroRustError> {
        if inputs.len() != self.in_features {
            return Err(MicroRustError::InputSizeMismatch {
                expected: self.in_features,
                actual: inputs.len(),
            });
        }
        self.neurons.iter().map(|n| n.call(inputs)).collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(j, n)| {
                n.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("neuron{}.{}", j, name), p))
            })
            .collect()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let neurons: Vec<String> = self.neurons.iter().map(|n| n.to_string()).collect();
        write!(f, "Layer of [{}]", neurons.join(", "))
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
