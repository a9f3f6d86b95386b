//! Graphviz export of expression graphs.

use crate::autograd::topological_sort;
use crate::value::{NodeId, Value};
use std::collections::HashMap;
use std::fmt;

/// A trait for types that can be converted into a DOT graph format string.
pub trait ToDot {
    /// Converts the object to a string in DOT format for visualization.
    ///
    /// The resulting string can be rendered with Graphviz (`dot -Tsvg`).
    fn to_dot(&self) -> String;
}

/// The expression graph reachable from one root value.
///
/// Every node becomes a rectangle showing its label, value and gradient.
/// Every non-leaf node also gets a small operation vertex carrying its tag,
/// with edges running operand -> operation -> result. Vertex ids are handed
/// out in traversal order from the root, so the same graph always renders
/// the same text.
#[derive(Debug, Clone)]
pub struct ValueGraph {
    root: Value,
}

impl ValueGraph {
    pub fn new(root: &Value) -> Self {
        ValueGraph { root: root.clone() }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

fn value_label(value: &Value) -> String {
    let label = value.label();
    let prefix = if label.is_empty() {
        String::new()
    } else {
        format!("{}|", escape(&label))
    };
    format!("{}val={:.4}, grad={:.4}", prefix, value.data(), value.grad())
}

impl ValueGraph {
    /// Writes the DOT text for this graph into `out`.
    ///
    /// All vertices come first, then all edges, each group in traversal order.
    pub fn write_dot<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        let order = topological_sort(&self.root);
        let ids: HashMap<NodeId, usize> = order
            .iter()
            .enumerate()
            .map(|(i, v)| (v.node_id(), i))
            .collect();

        writeln!(out, "digraph G {{")?;
        writeln!(out, "  rankdir=LR;")?;
        for (i, node) in order.iter().enumerate() {
            writeln!(
                out,
                "  value_node_{}[shape=rectangle,label=\"{}\"];",
                i,
                value_label(node)
            )?;
            if !node.is_leaf() {
                writeln!(out, "  op_node_{}[label=\"{}\"];", i, node.op())?;
            }
        }
        for (i, node) in order.iter().enumerate() {
            if node.is_leaf() {
                continue;
            }
            writeln!(out, "  op_node_{} -> value_node_{};", i, i)?;
            for input in node.prev() {
                if let Some(j) = ids.get(&input.node_id()) {
                    writeln!(out, "  value_node_{} -> op_node_{};", j, i)?;
                }
            }
        }
        writeln!(out, "}}")?;

        log::debug!("ValueGraph::write_dot: {} nodes", order.len());
        Ok(())
    }
}

impl ToDot for ValueGraph {
    fn to_dot(&self) -> String {
        let mut out = String::new();
        if let Err(err) = self.write_dot(&mut out) {
            log::error!("ValueGraph::to_dot: {}", err);
        }
        out
    }
}

impl ToDot for Value {
    fn to_dot(&self) -> String {
        ValueGraph::new(self).to_dot()
    }
}
