// src/nn/layers/mod.rs
// Fully connected building blocks, from a single neuron up to a network.

pub mod layer;
pub mod mlp;
pub mod neuron;

// Re-export key layer structs
pub use layer::Layer;
pub use mlp::Mlp;
pub use neuron::Neuron;
