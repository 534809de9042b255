use crate::autograd::backward_op::apply_rule;
use crate::autograd::graph::build_order;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use log::{debug, trace, warn};

/// Performs the backward pass starting from `root`.
///
/// Seeds `root.grad = 1.0`, sorts the reachable nodes with [`build_order`] and walks
/// them from the root back to the leaves, applying each node's rule. Afterwards every
/// reachable node holds d(root)/d(node), clipped per contribution to the graph's
/// [`ClipRange`](crate::ClipRange).
///
/// Gradients are accumulated, not overwritten: running the pass twice without
/// [`Graph::zero_grad`] in between adds the second pass on top of the first (the
/// root itself is re-seeded to `1.0`).
///
/// # Errors
/// * `InvalidNode` if `root` or a reachable operand is not in the arena.
/// * `CycleDetected` if the reachable subgraph contains a cycle.
/// * `ArityMismatch` if a reachable node's operands do not fit its rule.
///
/// All of these are detected before any gradient is touched.
pub fn propagate(graph: &mut Graph, root: NodeId) -> Result<(), ScalarGradError> {
    let order = build_order(graph, root)?;
    for &id in &order {
        graph.node(id)?.check_arity(id)?;
    }
    debug!("backward: root {}, {} reachable node(s)", root, order.len());

    graph.set_grad(root, 1.0)?;
    for &id in order.iter().rev() {
        trace!("backward: {} ({:?}) grad = {}", id, graph[id].rule(), graph[id].grad());
        apply_rule(graph, id)?;
    }

    let non_finite = order
        .iter()
        .filter(|&&id| !graph[id].grad().is_finite())
        .count();
    if non_finite > 0 {
        warn!(
            "backward from {} left {} node(s) with a non-finite gradient",
            root, non_finite
        );
    }
    debug!("backward: done");
    Ok(())
}

impl Graph {
    /// Runs [`propagate`] from `root`.
    pub fn backward(&mut self, root: NodeId) -> Result<(), ScalarGradError> {
        propagate(self, root)
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
