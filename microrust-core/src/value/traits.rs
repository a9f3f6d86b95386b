// src/value/traits.rs

use crate::ops::arithmetic::add_op;
use crate::value::Value;
use num_traits::{One, Zero};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::rc::Rc;

// --- Trait Implementations ---

impl Clone for Value {
    /// Clones the handle. This is a shallow clone that increases the reference
    /// count of the underlying node; both handles refer to the same graph
    /// vertex.
    fn clone(&self) -> Self {
        Value {
            data: Rc::clone(&self.data),
        }
    }
}

impl PartialEq for Value {
    /// Handles compare by node identity, not by value.
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node_id().hash(state);
    }
}

impl fmt::Debug for Value {
    /// Shows the node's own fields only; operands are summarised by count so
    /// large graphs do not get printed recursively.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.read_data();
        f.debug_struct("Value")
            .field("data", &node.data)
            .field("grad", &node.grad)
            .field("op", &node.op.tag())
            .field("prev", &node.prev.len())
            .field("label", &node.label)
            .finish()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.read_data();
        write!(f, "Value(data={}, grad={})", node.data, node.grad)?;
        if !node.label.is_empty() {
            write!(f, " | {}", node.label)?;
        }
        Ok(())
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::new(0.0)
    }
}

impl Sum for Value {
    /// Folds with `add_op` starting from a zero leaf, so the result is always
    /// a fresh node even for empty or single-element iterators.
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Self {
        iter.fold(Value::new(0.0), |acc, v| add_op(&acc, &v))
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Self {
        iter.fold(Value::new(0.0), |acc, v| add_op(&acc, v))
    }
}

impl Zero for Value {
    fn zero() -> Self {
        Value::new(0.0)
    }

    fn is_zero(&self) -> bool {
        self.data() == 0.0
    }
}

impl One for Value {
    fn one() -> Self {
        Value::new(1.0)
    }
}
