use crate::value::Value;

/// The backward rule of a node, identified by the primitive that produced it.
///
/// Every node carries exactly one `BackwardOp`. The variant records which
/// primitive built the node plus any constant it was called with (the
/// exponent of [`pow_op`](crate::ops::arithmetic::pow_op)); the operands
/// themselves live in the node's `prev` list. During the reverse pass the
/// executor dispatches on the variant instead of calling a captured closure.
///
/// Division is not a variant: `a / b` is built as `a * b^-1` and inherits its
/// gradient from [`Mul`](BackwardOp::Mul) and [`Pow`](BackwardOp::Pow).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackwardOp {
    /// A leaf: input or trainable parameter. Its rule does nothing.
    Leaf,
    Add,
    Sub,
    Neg,
    Mul,
    /// `a^exponent` for a constant real exponent (not a graph node).
    Pow { exponent: f64 },
    Exp,
    Tanh,
    Relu,
}

impl BackwardOp {
    /// The operation tag shown by visualizations and `Value::op()`.
    pub fn tag(&self) -> &'static str {
        match self {
            BackwardOp::Leaf => "val",
            BackwardOp::Add => "+",
            BackwardOp::Sub => "-",
            BackwardOp::Neg => "neg",
            BackwardOp::Mul => "*",
            BackwardOp::Pow { .. } => "pow",
            BackwardOp::Exp => "exp",
            BackwardOp::Tanh => "tanh",
            BackwardOp::Relu => "relu",
        }
    }

    /// Number of operands the producing primitive takes.
    pub fn arity(&self) -> usize {
        match self {
            BackwardOp::Leaf => 0,
            BackwardOp::Add | BackwardOp::Sub | BackwardOp::Mul => 2,
            BackwardOp::Neg
            | BackwardOp::Pow { .. }
            | BackwardOp::Exp
            | BackwardOp::Tanh
            | BackwardOp::Relu => 1,
        }
    }

    /// Applies the chain rule for this node.
    ///
    /// # Arguments
    /// * `out_grad`: the node's accumulated gradient (dL/d out).
    /// * `out_data`: the node's forward value, reused by `exp`, `tanh` and
    ///   `relu`, whose derivatives are cheapest in terms of the output.
    /// * `inputs`: the node's operands, in construction order.
    ///
    /// Contributions are *added* to each operand's gradient. An operand that
    /// appears twice (`x * x`) receives both contributions.
    pub fn backward(&self, out_grad: f64, out_data: f64, inputs: &[Value]) {
        match (self, inputs) {
            (BackwardOp::Leaf, []) => {}
            (BackwardOp::Add, [a, b]) => {
                a.accumulate_grad(out_grad);
                b.accumulate_grad(out_grad);
            }
            (BackwardOp::Sub, [a, b]) => {
                a.accumulate_grad(out_grad);
                b.accumulate_grad(-out_grad);
            }
            (BackwardOp::Neg, [a]) => {
                a.accumulate_grad(-out_grad);
            }
            (BackwardOp::Mul, [a, b]) => {
                // Read both operands before writing either.
                let (a_data, b_data) = (a.data(), b.data());
                a.accumulate_grad(out_grad * b_data);
                b.accumulate_grad(out_grad * a_data);
            }
            (BackwardOp::Pow { exponent }, [a]) => {
                let k = *exponent;
                a.accumulate_grad(out_grad * k * a.data().powf(k - 1.0));
            }
            (BackwardOp::Exp, [a]) => {
                a.accumulate_grad(out_grad * out_data);
            }
            (BackwardOp::Tanh, [a]) => {
                a.accumulate_grad(out_grad * (1.0 - out_data * out_data));
            }
            (BackwardOp::Relu, [a]) => {
                let local = if out_data > 0.0 { 1.0 } else { 0.0 };
                a.accumulate_grad(out_grad * local);
            }
            (op, inputs) => {
                // Nodes are only built through the primitives, which always
                // pass the right number of operands.
                log::warn!(
                    "BackwardOp::{:?} called with {} inputs (expected {}); skipping",
                    op,
                    inputs.len(),
                    op.arity()
                );
            }
        }
    }
}
