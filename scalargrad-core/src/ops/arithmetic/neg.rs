use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;

/// Creates a new leaf holding `-value(a)`.
///
/// The leaf is detached from `a`: gradient reaching it is never forwarded to `a`.
/// [`sub_op`](super::sub_op) relies on this, which is why the subtrahend of a
/// subtraction receives no gradient.
pub fn negate_literal_op(graph: &mut Graph, a: NodeId) -> Result<NodeId, ScalarGradError> {
    let value = graph.value(a)?;
    Ok(graph.leaf(-value))
}
