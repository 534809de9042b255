use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{GradRule, Node, NodeId};

/// Multiplies two nodes: `a * b`.
///
/// Backward: `a` receives `grad * b`, `b` receives `grad * a`.
///
/// # Errors
/// `ScalarGradError::InvalidNode` if either handle is not part of `graph`.
pub fn mul_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
    let value = graph.value(a)? * graph.value(b)?;
    Ok(graph.push(Node::derived(value, vec![a, b], GradRule::Mul)))
}

impl Graph {
    /// See [`mul_op`].
    pub fn mul(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
        mul_op(self, a, b)
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
