use crate::autograd::graph::topological_sort;
use crate::value::Value;

impl Value {
    /// Performs the reverse pass starting from this value.
    ///
    /// Seeds this node's gradient with exactly `1.0`, orders every reachable
    /// node root-first (each node strictly before all of its operands) and
    /// runs each node's backward rule in that order. By the time a node's
    /// rule runs, every consumer of that node has already pushed its
    /// contribution into the node's gradient.
    ///
    /// Gradients are **not** reset beforehand: calling `backward()` twice, or
    /// on two graphs sharing leaves, accumulates on top of whatever is
    /// already stored. Zero the participating gradients between independent
    /// passes (see [`Value::zero_grad_graph`] or `Optimizer::zero_grad`).
    pub fn backward(&self) {
        self.set_grad(1.0);
        let order = topological_sort(self);
        log::debug!("backward(): running {} backward rules", order.len());
        for node in &order {
            node.backward_step();
        }
    }

    /// Runs this node's own backward rule once, pushing its current gradient
    /// into its operands.
    ///
    /// This is the executor's per-node step; client code should call
    /// [`Value::backward`] instead.
    pub fn backward_step(&self) {
        let (op, out_grad, out_data, inputs) = {
            let node = self.read_data();
            (node.op, node.grad, node.data, node.prev.clone())
        };
        log::trace!("backward_step: {} (grad={})", op.tag(), out_grad);
        op.backward(out_grad, out_data, &inputs);
    }

    /// Zeroes the gradient of every node reachable from this one, this node
    /// included.
    pub fn zero_grad_graph(&self) {
        for node in topological_sort(self) {
            node.zero_grad();
        }
    }
}
