use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Builds a topological order of every node reachable from `root`.
///
/// Depth-first, operands in declaration order, each node appended after all of its
/// operands (post-order). A node shared by several consumers appears exactly once.
/// The backward pass consumes the result in reverse, so a node is only processed
/// once every consumer has pushed its contribution into it.
///
/// The traversal keeps its own stack instead of recursing, so long chains do not
/// exhaust the call stack.
///
/// # Errors
/// * `InvalidNode` if `root` or any reachable operand is not in the arena.
/// * `CycleDetected` if a node is reached again while it is still being expanded.
pub fn build_order(graph: &Graph, root: NodeId) -> Result<Vec<NodeId>, ScalarGradError> {
    graph.ensure(root)?;

    let mut marks = vec![Mark::Unvisited; graph.len()];
    let mut order = Vec::new();
    // (node, index of the next operand to visit)
    let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
    marks[root.index()] = Mark::InProgress;

    while let Some(frame) = stack.last_mut() {
        let (id, next) = *frame;
        match graph.node(id)?.operands().get(next).copied() {
            Some(operand) => {
                frame.1 += 1;
                let mark = marks
                    .get(operand.index())
                    .copied()
                    .ok_or(ScalarGradError::InvalidNode {
                        id: operand,
                        len: graph.len(),
                    })?;
                match mark {
                    Mark::Unvisited => {
                        marks[operand.index()] = Mark::InProgress;
                        stack.push((operand, 0));
                    }
                    Mark::InProgress => return Err(ScalarGradError::CycleDetected(operand)),
                    Mark::Done => trace!("[build_order] {} already visited", operand),
                }
            }
            None => {
                marks[id.index()] = Mark::Done;
                order.push(id);
                stack.pop();
            }
        }
    }

    trace!("[build_order] {} node(s) reachable from {}", order.len(), root);
    Ok(order)
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
