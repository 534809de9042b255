use super::*;

#[test]
fn test_relu_forward() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let inputs = [-2.0, -1.0, 0.0, 1.0, 2.0];
    let expected = [0.0, 0.0, 0.0, 1.0, 2.0];
    for (&x, &want) in inputs.iter().zip(expected.iter()) {
        let a = graph.leaf(x);
        let r = relu_op(&mut graph, a)?;
        assert_eq!(graph[r].value(), want);
        assert_eq!(graph[r].operands(), &[a]);
        assert_eq!(graph[r].rule(), GradRule::Relu);
    }
    Ok(())
}

#[test]
fn test_relu_nan_maps_to_zero() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(f64::NAN);
    let r = graph.relu(a)?;
    assert_eq!(graph[r].value(), 0.0);
    Ok(())
}

#[test]
fn test_relu_backward() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let pos = graph.leaf(2.0);
    let three = graph.leaf(3.0);
    let r = graph.relu(pos)?;
    let out = graph.mul(r, three)?;
    graph.backward(out)?;
    assert_eq!(graph.grad(pos)?, 3.0);

    let zero = graph.leaf(0.0);
    let rz = graph.relu(zero)?;
    graph.backward(rz)?;
    assert_eq!(graph.grad(zero)?, 0.0);
    Ok(())
}

#[test]
fn test_relu_invalid_operand() {
    let mut graph = Graph::new();
    assert!(matches!(
        graph.relu(NodeId(0)),
        Err(ScalarGradError::InvalidNode { .. })
    ));
}
