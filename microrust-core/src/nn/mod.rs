// src/nn/mod.rs
// Neurons, layers and multi-layer perceptrons built from scalar values.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module

// Re-export common items
pub use layers::{Layer, Mlp, Neuron};
pub use losses::{accuracy, hinge_loss, l2_regularization, mse_loss, Reduction};
pub use module::Module;
