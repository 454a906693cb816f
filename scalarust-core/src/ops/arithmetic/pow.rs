// scalarust-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::node::Node;

// --- Backward Operation ---

#[derive(Debug)]
struct PowBackward {
    base_value: f64,
    exponent: f64,
}

impl BackwardOp for PowBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        // d(x^p)/dx = p * x^(p-1)
        let local = self.exponent * self.base_value.powf(self.exponent - 1.0);
        vec![local * grad_output]
    }
}

// --- Forward Operation ---

/// Raises `base` to a constant power. Tag `"**{exponent}"`.
///
/// The exponent is a plain number, not a node: no gradient flows into it.
/// A negative base with a fractional exponent yields NaN, which propagates
/// like any other value.
pub fn pow_op(base: &Node, exponent: f64) -> Node {
    let base_value = base.value();
    Node::from_op(
        base_value.powf(exponent),
        vec![base.clone()],
        Box::new(PowBackward {
            base_value,
            exponent,
        }),
        format!("**{}", exponent),
    )
}

// --- Node Method ---

impl Node {
    /// Returns `self ^ exponent`. See [`pow_op`].
    pub fn pow(&self, exponent: f64) -> Node {
        pow_op(self, exponent)
    }
}
