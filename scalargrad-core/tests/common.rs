use rand::rngs::StdRng;
use rand::Rng;
use scalargrad_core::{Graph, NodeId, ScalarGradError};

/// One operator application in a generated expression. Indices refer to earlier
/// positions: inputs first, then the result of every previous step.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub enum Step {
    Add(usize, usize),
    Sub(usize, usize),
    Mul(usize, usize),
    Div(usize, usize),
    Pow(usize, usize),
    Relu(usize),
}

#[allow(dead_code)]
pub fn random_recipe(rng: &mut StdRng, inputs: usize, steps: usize, smooth_only: bool) -> Vec<Step> {
    let mut recipe = Vec::with_capacity(steps);
    for step in 0..steps {
        let available = inputs + step;
        let a = rng.gen_range(0..available);
        let b = rng.gen_range(0..available);
        let kinds = if smooth_only { 3 } else { 6 };
        recipe.push(match rng.gen_range(0..kinds) {
            0 => Step::Add(a, b),
            1 => Step::Mul(a, b),
            2 => Step::Relu(a),
            3 => Step::Sub(a, b),
            4 => Step::Div(a, b),
            _ => Step::Pow(a, b),
        });
    }
    recipe
}

#[allow(dead_code)]
pub fn build(
    graph: &mut Graph,
    leaves: &[NodeId],
    recipe: &[Step],
) -> Result<NodeId, ScalarGradError> {
    let mut nodes = leaves.to_vec();
    for step in recipe {
        let id = match *step {
            Step::Add(a, b) => graph.add(nodes[a], nodes[b])?,
            Step::Sub(a, b) => graph.sub(nodes[a], nodes[b])?,
            Step::Mul(a, b) => graph.mul(nodes[a], nodes[b])?,
            Step::Div(a, b) => graph.div(nodes[a], nodes[b])?,
            Step::Pow(a, b) => graph.pow(nodes[a], nodes[b])?,
            Step::Relu(a) => graph.relu(nodes[a])?,
        };
        nodes.push(id);
    }
    Ok(*nodes.last().expect("recipe needs at least one input"))
}

/// All nodes reachable from `root`, found by walking operand lists.
#[allow(dead_code)]
pub fn reachable(graph: &Graph, root: NodeId) -> Vec<NodeId> {
    let mut seen = vec![false; graph.len()];
    let mut stack = vec![root];
    let mut found = Vec::new();
    while let Some(id) = stack.pop() {
        if seen[id.index()] {
            continue;
        }
        seen[id.index()] = true;
        found.push(id);
        stack.extend_from_slice(graph[id].operands());
    }
    found
}
