use super::layer::Layer;
use crate::error::MicroRustError;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// A multi-layer perceptron: fully connected tanh layers applied in sequence.
///
/// `Mlp::new(3, &[4, 4, 1], rng)` builds layers 3→4, 4→4 and 4→1.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
    in_features: usize,
}

impl Mlp {
    pub fn new<R: Rng + ?Sized>(n_in: usize, n_outs: &[usize], rng: &mut R) -> Self {
        let mut layers = Vec::with_capacity(n_outs.len());
        let mut width = n_in;
        for &n_out in n_outs {
            layers.push(Layer::new(width, n_out, &mut *rng));
            width = n_out;
        }
        log::debug!("Mlp::new: {} inputs, layer widths {:?}", n_in, n_outs);
        Mlp {
            layers,
            in_features: n_in,
        }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    /// Width of the final layer (the input width for an empty network).
    pub fn out_features(&self) -> usize {
        self.layers
            .last()
            .map_or(self.in_features, Layer::out_features)
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, MicroRustError> {
        if inputs.len() != self.in_features {
            return Err(MicroRustError::InputSizeMismatch {
                expected: self.in_features,
                actual: inputs.len(),
            });
        }
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(k, l)| {
                l.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("layer{}.{}", k, name), p))
            })
            .collect()
    }
}

impl fmt::Display for Mlp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layers: Vec<String> = self.layers.iter().map(|l| l.to_string()).collect();
        write!(f, "MLP of [{}]", layers.join(", "))
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
