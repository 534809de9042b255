use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{GradRule, Node, NodeId};

/// Applies the Rectified Linear Unit: `max(0, a)`.
///
/// Backward: the operand receives the output gradient when its value is strictly
/// positive and nothing otherwise, so the subgradient at exactly zero is 0.
///
/// # Errors
/// `ScalarGradError::InvalidNode` if `a` is not part of `graph`.
pub fn relu_op(graph: &mut Graph, a: NodeId) -> Result<NodeId, ScalarGradError> {
    let input = graph.value(a)?;
    let value = if input > 0.0 { input } else { 0.0 };
    Ok(graph.push(Node::derived(value, vec![a], GradRule::Relu)))
}

impl Graph {
    /// See [`relu_op`].
    pub fn relu(&mut self, a: NodeId) -> Result<NodeId, ScalarGradError> {
        relu_op(self, a)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
