use crate::error::MicroRustError;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// Parameters are plain [`Value`] leaves. Handing them out clones the
/// handles, so an optimizer that holds the returned values updates the very
/// nodes the module computes with.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `inputs`: One value per input of the module.
    ///
    /// # Returns
    /// The module outputs, or [`MicroRustError::InputSizeMismatch`] if
    /// `inputs` does not have the width the module was built for.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, MicroRustError>;

    /// Returns every learnable parameter of the module, sub-modules included.
    ///
    /// The order is fixed at construction and identical across calls.
    fn parameters(&self) -> Vec<Value>;

    /// Returns the parameters along with hierarchical names
    /// (e.g. "layer1.neuron0.w2"). Same order as [`Module::parameters`].
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// Resets the gradient of every parameter to zero.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    /// Number of learnable scalars.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
