use crate::autograd::BackwardOp;
use crate::value::Value;
use std::rc::Rc;

/// The node stored behind every [`Value`] handle.
///
/// A `ValueData` is created exactly once, by a leaf constructor or by one
/// primitive operation, and is never copied afterwards. Its `prev` list is
/// fixed at construction and can only point at nodes that already existed,
/// which is what keeps the expression graph acyclic.
pub struct ValueData {
    /// Current scalar value. Updated in place by optimizers between passes.
    pub(crate) data: f64,
    /// Accumulated gradient. Starts at 0 and is only ever added to during a
    /// reverse pass (the root is seeded with 1).
    pub(crate) grad: f64,
    /// The primitive that produced this node; doubles as its backward rule.
    pub(crate) op: BackwardOp,
    /// Operand handles in construction order; empty for leaves.
    pub(crate) prev: Vec<Value>,
    /// Optional human-readable name.
    pub(crate) label: String,
}

impl ValueData {
    /// Creates a leaf node holding `data`.
    pub(crate) fn leaf(data: f64) -> Self {
        ValueData::from_op(data, BackwardOp::Leaf, Vec::new())
    }

    /// Creates a node produced by `op` from the operands in `prev`.
    pub(crate) fn from_op(data: f64, op: BackwardOp, prev: Vec<Value>) -> Self {
        debug_assert_eq!(op.arity(), prev.len(), "operand count does not match {}", op.tag());
        ValueData {
            data,
            grad: 0.0,
            op,
            prev,
            label: String::new(),
        }
    }
}

impl Drop for ValueData {
    /// Releases the operand chain iteratively. The default drop glue would
    /// recurse once per graph level and overflow the stack on long chains.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.prev);
        while let Some(value) = pending.pop() {
            // Only nodes whose last handle is going away are unwrapped; shared
            // nodes just lose one reference.
            if let Ok(cell) = Rc::try_unwrap(value.data) {
                let mut node = cell.into_inner();
                pending.append(&mut node.prev);
            }
        }
    }
}
