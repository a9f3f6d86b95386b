// microrust-core/src/optim/mod.rs

//! Optimizers for training networks built from [`Value`](crate::value::Value)
//! parameters.
//!
//! This module provides the [`Optimizer`] trait, stochastic gradient descent
//! and learning-rate schedulers that drive an optimizer's step size.

pub mod lr_scheduler;
pub mod optimizer_trait;
pub mod sgd;

// Re-export key items for easier access
pub use lr_scheduler::{LRScheduler, LinearLR, StepLR};
pub use optimizer_trait::Optimizer;
pub use sgd::{SgdOptimizer, SgdOptions};
