//! Reverse-mode differentiation over a [`Graph`](crate::Graph).
//!
//! [`build_order`] sorts the nodes reachable from a root so that operands come before
//! their consumers; [`propagate`] walks that order backwards and lets each node's
//! [`GradRule`](crate::GradRule) push gradient into its operands.

pub mod backward;
pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward::propagate;
pub use grad_check::{check_grad, GradCheckError};
pub use graph::build_order;
