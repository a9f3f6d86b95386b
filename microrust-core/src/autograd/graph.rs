use crate::value::{NodeId, Value};
use std::collections::HashSet;

/// Builds the post-order of the graph below `root`: every node appears after
/// all of its operands, each reachable node exactly once.
///
/// Depth-first from `root`, operands visited in their stored order. A node is
/// marked visited when first reached (before descending into its operands)
/// and emitted once all of its operands are done, so diamond-shaped reuse
/// costs one visit per node. The traversal keeps its own stack instead of
/// recursing: long expression chains (a loss summed over a dataset, say) are
/// deeper than the call stack allows, and the resulting order is the same as
/// the recursive formulation.
pub(crate) fn build_topo(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Value> = Vec::new();
    // (node, its operands, index of the next operand to descend into)
    let mut stack: Vec<(Value, Vec<Value>, usize)> = Vec::new();

    visited.insert(root.node_id());
    stack.push((root.clone(), root.prev(), 0));

    while let Some((_, prev, next)) = stack.last_mut() {
        if let Some(input) = prev.get(*next).cloned() {
            *next += 1;
            if visited.insert(input.node_id()) {
                let input_prev = input.prev();
                stack.push((input, input_prev, 0));
            }
        } else if let Some((node, _, _)) = stack.pop() {
            sorted_list.push(node);
        }
    }

    sorted_list
}

/// Returns every node reachable from `root`, root first, with each node
/// strictly before all of its operands.
///
/// This is the order in which [`Value::backward`] runs backward rules: a node
/// only propagates once every node that consumes it has contributed to its
/// gradient. The order is deterministic for a fixed graph.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let mut order = build_topo(root);
    order.reverse();
    order
}
