// src/value/mod.rs

use crate::autograd::BackwardOp;
use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod autograd_methods;
mod operators;
mod traits;

/// Identity of a node in the expression graph.
///
/// Two handles that point at the same `ValueData` share a `NodeId`, which is
/// what the topological sort and the DOT exporter key their visited sets on.
pub type NodeId = *const RefCell<ValueData>;

/// A handle to one scalar node of the expression graph.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** every handle and every downstream node that lists
///     this node as an operand keeps it alive; cloning a `Value` only bumps a
///     reference count.
/// 2.  **Interior Mutability:** the value and gradient can be updated through
///     a shared handle, which is how the reverse pass accumulates gradients
///     and how optimizers apply their updates.
///
/// The graph is single-threaded by construction (`Rc` is neither `Send` nor
/// `Sync`), so no locking is involved.
///
/// The node itself is only reachable through the accessors; borrow guards do
/// not leave the crate:
///
/// ```compile_fail
/// let v = microrust_core::Value::new(1.0);
/// let _guard = v.write_data();
/// ```
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a new leaf value.
    pub fn new(data: f64) -> Self {
        Value::from_data(ValueData::leaf(data))
    }

    /// Creates a new leaf value carrying a label.
    pub fn with_label(data: f64, label: impl Into<String>) -> Self {
        let value = Value::new(data);
        value.set_label(label);
        value
    }

    /// Wraps a freshly built node. Used by the primitive operations.
    pub(crate) fn from_op(data: f64, op: BackwardOp, prev: Vec<Value>) -> Self {
        Value::from_data(ValueData::from_op(data, op, prev))
    }

    fn from_data(node: ValueData) -> Self {
        Value {
            data: Rc::new(RefCell::new(node)),
        }
    }

    /// Borrows the underlying node immutably.
    ///
    /// Guards never leave the crate, and no borrow outlives the method that
    /// takes it, so the public accessors cannot hit a conflicting borrow.
    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    /// Borrows the underlying node mutably.
    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }

    /// Returns the current scalar value.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Overwrites the scalar value. Existing downstream nodes keep the value
    /// they were computed with; only graphs built afterwards see the change.
    pub fn set_data(&self, data: f64) {
        self.write_data().data = data;
    }

    /// Returns the accumulated gradient.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Overwrites the accumulated gradient.
    pub fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Resets the gradient of this node to zero.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    /// Adds `delta` to the accumulated gradient.
    pub fn accumulate_grad(&self, delta: f64) {
        self.write_data().grad += delta;
    }

    /// Returns the tag of the primitive that produced this node
    /// (`"val"` for leaves).
    pub fn op(&self) -> &'static str {
        self.read_data().op.tag()
    }

    /// Returns the primitive (and backward rule) that produced this node.
    pub fn backward_op(&self) -> BackwardOp {
        self.read_data().op
    }

    pub fn label(&self) -> String {
        self.read_data().label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = label.into();
    }

    /// Returns the operand handles in the order they were passed to the
    /// producing primitive.
    pub fn prev(&self) -> Vec<Value> {
        self.read_data().prev.clone()
    }

    /// Returns `true` if this node was not produced by an operation.
    pub fn is_leaf(&self) -> bool {
        self.read_data().prev.is_empty()
    }

    /// Returns the identity of the underlying node.
    pub fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// Returns `true` if both handles point at the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
