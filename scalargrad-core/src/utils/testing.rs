use crate::graph::Graph;
use crate::node::NodeId;

/// Checks that the gradient of each listed node is within `tolerance` of the
/// expected value.
/// Panics on an invalid handle or on the first mismatch.
pub fn check_grads_near(graph: &Graph, expected: &[(NodeId, f64)], tolerance: f64) {
    for &(id, want) in expected {
        let actual = graph
            .grad(id)
            .unwrap_or_else(|e| panic!("Failed to read gradient of {}: {}", id, e));
        let diff = (actual - want).abs();
        if diff > tolerance || diff.is_nan() {
            panic!(
                "Gradient mismatch at node {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                id, actual, want, diff, tolerance
            );
        }
    }
}
