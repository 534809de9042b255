use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{GradRule, Node, NodeId};

/// Raises `base` to the power `exponent` using `f64::powf`.
///
/// Negative bases with fractional exponents, `0^-1` and similar cases produce NaN or
/// infinity as `powf` does; they are not reported as errors.
///
/// Backward: the base receives `exponent * base^(exponent - 1) * grad`. The exponent
/// receives `ln(base) * output * grad` only when the exponent is strictly positive;
/// for non-positive exponents its contribution is skipped even where the derivative
/// exists.
///
/// # Errors
/// `ScalarGradError::InvalidNode` if either handle is not part of `graph`.
pub fn pow_op(
    graph: &mut Graph,
    base: NodeId,
    exponent: NodeId,
) -> Result<NodeId, ScalarGradError> {
    let value = graph.value(base)?.powf(graph.value(exponent)?);
    Ok(graph.push(Node::derived(
        value,
        vec![base, exponent],
        GradRule::Pow,
    )))
}

impl Graph {
    /// See [`pow_op`].
    pub fn pow(&mut self, base: NodeId, exponent: NodeId) -> Result<NodeId, ScalarGradError> {
        pow_op(self, base, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
