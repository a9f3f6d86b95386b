//! # Primitive operations (`ops`)
//!
//! The fixed set of differentiable scalar operations. Each primitive has a
//! core function named `xxx_op` that computes the forward value and records
//! the matching [`BackwardOp`](crate::autograd::BackwardOp) in the new node,
//! so the forward and backward halves of a rule are always defined together.
//!
//! - [`arithmetic`]: add, sub, neg, mul, div, pow.
//! - [`activation`]: tanh, relu.
//! - [`math_elem`]: exp.
//!
//! `Value` exposes the same operations as methods (`pow`, `exp`, `tanh`,
//! `relu`) and through the `std::ops` operators.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

pub use activation::{relu_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::exp_op;
