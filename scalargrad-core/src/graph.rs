use crate::error::ScalarGradError;
use crate::grad_clipping::ClipRange;
use crate::node::{Node, NodeId};
use log::trace;
use std::ops::Index;

/// Arena owning every node of a computation graph.
///
/// Nodes are appended by [`Graph::leaf`] and by the operators in [`crate::ops`], and
/// refer to their operands through [`NodeId`] handles. Since an operator can only
/// name nodes that already exist, graphs built through the public API are acyclic.
/// All nodes are dropped together with the graph.
///
/// Gradients are accumulated in place; call [`Graph::zero_grad`] before reusing a
/// graph for another backward pass.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    clip: ClipRange,
}

impl Graph {
    /// Creates an empty graph using the default clip range `[-10, 10]`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: Vec::with_capacity(capacity),
            clip: ClipRange::default(),
        }
    }

    /// Creates an empty graph whose backward passes clip to `clip`.
    pub fn with_clip_range(clip: ClipRange) -> Self {
        Graph {
            nodes: Vec::new(),
            clip,
        }
    }

    pub fn clip_range(&self) -> ClipRange {
        self.clip
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Wraps a scalar into a new leaf node.
    pub fn leaf(&mut self, value: f64) -> NodeId {
        self.push(Node::leaf(value))
    }

    /// Appends a node without validating its operands.
    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        trace!("[graph] push {} ({:?})", id, node.rule);
        self.nodes.push(node);
        id
    }

    fn invalid(&self, id: NodeId) -> ScalarGradError {
        ScalarGradError::InvalidNode {
            id,
            len: self.nodes.len(),
        }
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, ScalarGradError> {
        self.nodes.get(id.0).ok_or_else(|| self.invalid(id))
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, ScalarGradError> {
        let len = self.nodes.len();
        self.nodes
            .get_mut(id.0)
            .ok_or(ScalarGradError::InvalidNode { id, len })
    }

    pub fn value(&self, id: NodeId) -> Result<f64, ScalarGradError> {
        Ok(self.node(id)?.value)
    }

    pub fn grad(&self, id: NodeId) -> Result<f64, ScalarGradError> {
        Ok(self.node(id)?.grad)
    }

    /// Overwrites a node's gradient. No clipping is applied.
    pub fn set_grad(&mut self, id: NodeId, grad: f64) -> Result<(), ScalarGradError> {
        self.node_mut(id)?.grad = grad;
        Ok(())
    }

    /// Clips a node's gradient to the graph's range and returns the new value.
    pub fn clamp_grad(&mut self, id: NodeId) -> Result<f64, ScalarGradError> {
        let clip = self.clip;
        let node = self.node_mut(id)?;
        node.grad = clip.clamp(node.grad);
        Ok(node.grad)
    }

    /// Adds `contribution` to a node's gradient, then clips it.
    pub(crate) fn accumulate_grad(
        &mut self,
        id: NodeId,
        contribution: f64,
    ) -> Result<(), ScalarGradError> {
        let clip = self.clip;
        let node = self.node_mut(id)?;
        let raw = node.grad + contribution;
        let clipped = clip.clamp(raw);
        if clipped != raw && !raw.is_nan() {
            trace!("[graph] gradient of {} clipped from {} to {}", id, raw, clipped);
        }
        node.grad = clipped;
        Ok(())
    }

    /// Resets every gradient in the graph to zero.
    pub fn zero_grad(&mut self) {
        for node in &mut self.nodes {
            node.grad = 0.0;
        }
    }

    /// Iterates over all nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }

    pub(crate) fn ensure(&self, id: NodeId) -> Result<(), ScalarGradError> {
        self.node(id).map(|_| ())
    }
}

impl Index<NodeId> for Graph {
    type Output = Node;

    /// Panics if `id` does not belong to this graph; use [`Graph::node`] for a
    /// fallible lookup.
    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
