//! # microrust-core
//!
//! A scalar reverse-mode automatic differentiation engine with a small
//! neural-network toolkit on top.
//!
//! Every [`Value`] is one node of an expression graph. Arithmetic on values
//! records the operation and its operands; [`Value::backward`] then walks the
//! graph from a root and accumulates `d root / d node` into every node's
//! gradient.
//!
//! ```
//! use microrust_core::Value;
//!
//! let a = Value::new(2.0);
//! let b = Value::new(-3.0);
//! let c = &a * &b + 1.0;
//! c.backward();
//! assert_eq!(c.data(), -5.0);
//! assert_eq!(a.grad(), -3.0);
//! assert_eq!(b.grad(), 2.0);
//! ```

pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod utils;
pub mod value;
pub mod value_data;
pub mod visualization;

pub use error::MicroRustError;
pub use value::Value;
pub use visualization::{ToDot, ValueGraph};
// Re-export traits required by public impls
pub use num_traits;
