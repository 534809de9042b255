use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::arithmetic::{add::add_op, neg::negate_literal_op};

/// Subtracts two nodes: `a - b`, built as `add(a, negate_literal(b))`.
///
/// Only `a` is wired into the backward pass. `b` is read for its value and then
/// replaced by a detached negated literal, so `b.grad` is left untouched.
///
/// # Errors
/// `ScalarGradError::InvalidNode` if either handle is not part of `graph`.
pub fn sub_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
    graph.ensure(a)?;
    let negated = negate_literal_op(graph, b)?;
    add_op(graph, a, negated)
}

impl Graph {
    /// See [`sub_op`].
    pub fn sub(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
        sub_op(self, a, b)
    }
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
