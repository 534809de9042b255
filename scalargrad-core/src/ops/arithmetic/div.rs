use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::arithmetic::{mul::mul_op, pow::pow_op};
use crate::ops::literal;

/// Divides two nodes: `a / b`, built as `mul(a, pow(b, literal(-1)))`.
///
/// Division by zero yields infinity or NaN following IEEE-754.
///
/// # Errors
/// `ScalarGradError::InvalidNode` if either handle is not part of `graph`.
pub fn div_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
    // Validate both before appending anything.
    graph.ensure(a)?;
    graph.ensure(b)?;
    let minus_one = literal(graph, -1.0);
    let reciprocal = pow_op(graph, b, minus_one)?;
    mul_op(graph, a, reciprocal)
}

impl Graph {
    /// See [`div_op`].
    pub fn div(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
        div_op(self, a, b)
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
