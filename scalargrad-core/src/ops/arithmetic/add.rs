use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{GradRule, Node, NodeId};

/// Adds two nodes: `a + b`.
///
/// The result records `[a, b]` as operands with [`GradRule::Add`]; during the
/// backward pass each operand receives the output gradient unchanged.
///
/// # Errors
/// `ScalarGradError::InvalidNode` if either handle is not part of `graph`.
pub fn add_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
    let value = graph.value(a)? + graph.value(b)?;
    Ok(graph.push(Node::derived(value, vec![a, b], GradRule::Add)))
}

impl Graph {
    /// See [`add_op`].
    pub fn add(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
        add_op(self, a, b)
    }
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
