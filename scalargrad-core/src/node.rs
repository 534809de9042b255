use crate::error::ScalarGradError;
use std::fmt;

/// Stable handle to a [`Node`] stored in a [`Graph`](crate::Graph).
///
/// Handles are plain indices into the arena that created them. They stay valid for
/// the lifetime of that graph; using a handle with a different graph is a logic error
/// that is only caught when the index falls outside the other arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node inside its arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Backward computation attached to a derived node.
///
/// Subtraction and division are built from `Add`, `Mul` and `Pow`, so they need no
/// rule of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GradRule {
    /// Leaf node: nothing to propagate.
    #[default]
    None,
    Add,
    Mul,
    Pow,
    Relu,
}

impl GradRule {
    /// Number of operands a node carrying this rule must have.
    pub fn arity(self) -> usize {
        match self {
            GradRule::None => 0,
            GradRule::Add | GradRule::Mul | GradRule::Pow => 2,
            GradRule::Relu => 1,
        }
    }
}

/// A scalar value in the computation graph.
///
/// `value`, `operands` and `rule` are fixed when the node is created; only `grad`
/// changes afterwards, during a backward pass or through explicit resets.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) value: f64,
    /// Accumulated d(root)/d(self); zero until a backward pass reaches the node.
    pub(crate) grad: f64,
    pub(crate) operands: Vec<NodeId>,
    pub(crate) rule: GradRule,
}

impl Node {
    pub(crate) fn leaf(value: f64) -> Self {
        Node {
            value,
            grad: 0.0,
            operands: Vec::new(),
            rule: GradRule::None,
        }
    }

    pub(crate) fn derived(value: f64, operands: Vec<NodeId>, rule: GradRule) -> Self {
        Node {
            value,
            grad: 0.0,
            operands,
            rule,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn grad(&self) -> f64 {
        self.grad
    }

    pub fn operands(&self) -> &[NodeId] {
        &self.operands
    }

    pub fn rule(&self) -> GradRule {
        self.rule
    }

    pub fn is_leaf(&self) -> bool {
        self.operands.is_empty()
    }

    /// Verifies that the operand count matches the rule's arity.
    pub(crate) fn check_arity(&self, id: NodeId) -> Result<(), ScalarGradError> {
        let expected = self.rule.arity();
        if self.operands.len() != expected {
            return Err(ScalarGradError::ArityMismatch {
                id,
                rule: self.rule,
                expected,
                actual: self.operands.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value: {:.6}, Gradient: {:.6}", self.value, self.grad)
    }
}
