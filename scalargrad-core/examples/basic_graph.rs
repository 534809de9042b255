use scalargrad_core::{Graph, ScalarGradError};

fn main() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(3.0);
    let b = graph.leaf(2.0);
    let c = graph.add(a, b)?;
    let d = graph.mul(c, b)?;
    let e = graph.relu(d)?;

    graph.backward(e)?;

    for (name, id) in [("a", a), ("b", b), ("c", c), ("d", d), ("e", e)] {
        println!("{name}: {}", graph[id]);
    }
    Ok(())
}
