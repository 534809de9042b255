use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{GradRule, NodeId};

/// Applies the backward rule of node `id`.
///
/// Reads the node's gradient and value together with its operands' values and adds
/// the matching partial derivative into each operand's gradient. Every operand is
/// clipped right after receiving its contribution. Leaves are a no-op.
///
/// | rule   | contributions                                                        |
/// |--------|----------------------------------------------------------------------|
/// | `Add`  | `a += g`, `b += g`                                                   |
/// | `Mul`  | `a += g * b`, `b += g * a`                                           |
/// | `Pow`  | `a += b * a^(b-1) * g`; if `b > 0`: `b += ln(a) * out * g`           |
/// | `Relu` | `a += g` if `a > 0`, else `a += 0`                                   |
pub(crate) fn apply_rule(graph: &mut Graph, id: NodeId) -> Result<(), ScalarGradError> {
    let node = graph.node(id)?;
    node.check_arity(id)?;
    let rule = node.rule();
    let grad = node.grad();
    let out = node.value();

    match (rule, node.operands()) {
        (GradRule::None, _) => {}
        (GradRule::Add, &[a, b]) => {
            graph.accumulate_grad(a, grad)?;
            graph.accumulate_grad(b, grad)?;
        }
        (GradRule::Mul, &[a, b]) => {
            let (a_val, b_val) = (graph.value(a)?, graph.value(b)?);
            graph.accumulate_grad(a, grad * b_val)?;
            graph.accumulate_grad(b, grad * a_val)?;
        }
        (GradRule::Pow, &[base, exponent]) => {
            let (base_val, exp_val) = (graph.value(base)?, graph.value(exponent)?);
            graph.accumulate_grad(base, exp_val * base_val.powf(exp_val - 1.0) * grad)?;
            // ln(base) is only taken for positive exponents.
            if exp_val > 0.0 {
                graph.accumulate_grad(exponent, base_val.ln() * out * grad)?;
            }
        }
        (GradRule::Relu, &[a]) => {
            let contribution = if graph.value(a)? > 0.0 { grad } else { 0.0 };
            graph.accumulate_grad(a, contribution)?;
        }
        (rule, operands) => {
            return Err(ScalarGradError::ArityMismatch {
                id,
                rule,
                expected: rule.arity(),
                actual: operands.len(),
            })
        }
    }
    Ok(())
}
