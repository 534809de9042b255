//! # scalargrad-core
//!
//! Reverse-mode automatic differentiation over scalar values.
//!
//! Every value lives as a [`Node`] inside a [`Graph`] arena and is addressed by a
//! [`NodeId`] handle. Operators (`add`, `sub`, `mul`, `div`, `pow`, `relu`) append new
//! nodes that remember their operands and the [`GradRule`] used to differentiate them.
//! [`Graph::backward`] then seeds the chosen root with a gradient of `1.0` and
//! distributes it to every reachable node, clamping each contribution to the
//! graph's [`ClipRange`].
//!
//! ```
//! use scalargrad_core::Graph;
//!
//! let mut graph = Graph::new();
//! let a = graph.leaf(3.0);
//! let b = graph.leaf(2.0);
//! let c = graph.mul(a, b)?;
//! graph.backward(c)?;
//!
//! assert_eq!(graph[c].value(), 6.0);
//! assert_eq!(graph[a].grad(), 2.0);
//! assert_eq!(graph[b].grad(), 3.0);
//! # Ok::<(), scalargrad_core::ScalarGradError>(())
//! ```

pub mod autograd;
pub mod error;
pub mod grad_clipping;
pub mod graph;
pub mod node;
pub mod ops;
pub mod utils;

pub use error::ScalarGradError;
pub use grad_clipping::{clamp, ClipRange, MAX_GRAD, MIN_GRAD};
pub use graph::Graph;
pub use node::{GradRule, Node, NodeId};
