//! # Reverse-mode autodiff
//!
//! - [`backward_op`]: the per-node backward rules, one variant per primitive.
//! - [`graph`]: topological ordering of the expression graph.
//! - [`grad_check`]: finite-difference verification of the reverse pass.
//!
//! The reverse pass itself is [`Value::backward`](crate::value::Value::backward).

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use graph::topological_sort;
