use crate::error::ScalarGradError;
use crate::grad_clipping::ClipRange;
use crate::graph::Graph;
use crate::node::NodeId;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Invalid gradient check parameters: {0}")]
    InvalidParameters(String),

    #[error("Graph error during gradient check: {0}")]
    Graph(#[from] ScalarGradError),
}

/// Compares the gradients computed by the backward pass against central finite
/// differences.
///
/// `func` receives a fresh graph and one leaf per entry of `inputs`, builds its
/// expression and returns the output node. The analytical gradient of every input is
/// obtained with a single backward pass on an unclipped graph; the numerical one is
/// `(f(x + epsilon) - f(x - epsilon)) / (2 * epsilon)`.
///
/// An input passes when `|analytical - numerical| <= tolerance * (1 + |numerical|)`.
///
/// Inputs that only reach the output as the right operand of a subtraction get no
/// analytical gradient and will be reported as mismatches.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    if epsilon <= 0.0 || !epsilon.is_finite() {
        return Err(GradCheckError::InvalidParameters(format!(
            "epsilon must be positive and finite, got {epsilon}"
        )));
    }
    if tolerance.is_nan() || tolerance < 0.0 {
        return Err(GradCheckError::InvalidParameters(format!(
            "tolerance must be non-negative, got {tolerance}"
        )));
    }

    let mut graph = Graph::with_clip_range(ClipRange::unbounded());
    let leaves: Vec<NodeId> = inputs.iter().map(|&x| graph.leaf(x)).collect();
    let output = func(&mut graph, &leaves)?;
    graph.backward(output)?;

    for (input_index, &leaf) in leaves.iter().enumerate() {
        let analytical_grad = graph.grad(leaf)?;
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let loss_plus = evaluate(&func, inputs, input_index, epsilon)?;
        let loss_minus = evaluate(&func, inputs, input_index, -epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        debug!(
            "grad_check: input {} analytical={} numerical={} diff={}",
            input_index, analytical_grad, numerical_grad, difference
        );
        if difference > tolerance * (1.0 + numerical_grad.abs()) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }
    Ok(())
}

/// Forward-only evaluation of `func` with input `index` shifted by `delta`.
fn evaluate<F>(func: &F, inputs: &[f64], index: usize, delta: f64) -> Result<f64, ScalarGradError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    let mut graph = Graph::with_capacity(inputs.len());
    let leaves: Vec<NodeId> = inputs
        .iter()
        .enumerate()
        .map(|(i, &x)| graph.leaf(if i == index { x + delta } else { x }))
        .collect();
    let output = func(&mut graph, &leaves)?;
    graph.value(output)
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
