//! # Scalar Operations Module (`ops`)
//!
//! Operators append a new node to a [`Graph`] and record the operands it depends on
//! together with the [`GradRule`](crate::GradRule) used to differentiate it.
//!
//! ## Structure:
//!
//! - **`_op` functions:** each operator has a free function (`add_op`, `mul_op`, ...)
//!   taking the graph and the operand handles.
//! - **`Graph` methods:** thin wrappers (`graph.add(a, b)`) calling the `_op` functions.
//!
//! Every operator returns `Err(ScalarGradError::InvalidNode)` when handed a handle
//! that does not belong to the graph. Numeric domain problems (division by zero,
//! negative base with fractional exponent) are not errors and follow IEEE-754.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, pow and the literal helpers they are built on.
//! - [`activation`]: relu.

use crate::graph::Graph;
use crate::node::NodeId;

pub mod activation;
pub mod arithmetic;

pub use activation::relu_op;
pub use arithmetic::{add_op, div_op, mul_op, negate_literal_op, pow_op, sub_op};

/// Wraps a constant into a new leaf node. Same as [`Graph::leaf`].
pub fn literal(graph: &mut Graph, value: f64) -> NodeId {
    graph.leaf(value)
}
