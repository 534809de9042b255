use crate::node::{GradRule, NodeId};
use thiserror::Error;

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    #[error("Invalid node handle {id}: graph holds {len} node(s)")]
    InvalidNode { id: NodeId, len: usize },

    #[error("Cycle detected in the computation graph at node {0} during backward pass.")]
    CycleDetected(NodeId),

    #[error("Node {id} has rule {rule:?} expecting {expected} operand(s), got {actual}")]
    ArityMismatch {
        id: NodeId,
        rule: GradRule,
        expected: usize,
        actual: usize,
    },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
