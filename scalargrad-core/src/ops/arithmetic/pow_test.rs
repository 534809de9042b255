use super::*;
use approx::assert_relative_eq;

#[test]
fn test_pow_forward() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(2.0);
    let b = graph.leaf(3.0);
    let c = pow_op(&mut graph, a, b)?;

    assert_eq!(graph[c].value(), 8.0);
    assert_eq!(graph[c].operands(), &[a, b]);
    assert_eq!(graph[c].rule(), GradRule::Pow);
    Ok(())
}

#[test]
fn test_pow_fractional_exponent() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(2.0);
    let half = graph.leaf(0.5);
    let c = graph.pow(a, half)?;
    assert_relative_eq!(graph[c].value(), std::f64::consts::SQRT_2, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_pow_negative_base_fractional_exponent_is_nan() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(-8.0);
    let third = graph.leaf(1.0 / 3.0);
    let c = graph.pow(a, third)?;
    assert!(graph[c].value().is_nan());
    Ok(())
}

#[test]
fn test_pow_negative_base_integer_exponent() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(-2.0);
    let two = graph.leaf(2.0);
    let c = graph.pow(a, two)?;
    graph.backward(c)?;

    assert_eq!(graph[c].value(), 4.0);
    assert_eq!(graph[a].grad(), -4.0);
    // ln(-2) is NaN; the exponent still gets its (undefined) contribution.
    assert!(graph[two].grad().is_nan());
    Ok(())
}

#[test]
fn test_pow_backward_base() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(1.5);
    let b = graph.leaf(2.0);
    let c = graph.pow(a, b)?;
    graph.backward(c)?;
    assert_relative_eq!(graph.grad(a)?, 3.0, epsilon = 1e-12);
    assert_relative_eq!(graph.grad(b)?, 1.5_f64.ln() * 2.25, epsilon = 1e-12);
    Ok(())
}
