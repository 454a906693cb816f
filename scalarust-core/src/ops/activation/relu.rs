use crate::autograd::BackwardOp;
use crate::node::Node;

// --- Backward Operation ---

/// Stores the output value: the local gradient is 1 when the output is
/// positive and 0 otherwise, including at an input of exactly 0.
#[derive(Debug)]
struct ReluBackward {
    output_value: f64,
}

impl BackwardOp for ReluBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        let local = if self.output_value > 0.0 { 1.0 } else { 0.0 };
        vec![local * grad_output]
    }
}

// --- Forward Operation ---

/// Applies the Rectified Linear Unit, `max(0, x)`. Tag `"ReLU"`.
pub fn relu_op(input: &Node) -> Node {
    let x = input.value();
    let output_value = if x < 0.0 { 0.0 } else { x };
    Node::from_op(
        output_value,
        vec![input.clone()],
        Box::new(ReluBackward { output_value }),
        "ReLU",
    )
}

impl Node {
    /// Applies ReLU to this node. See [`relu_op`].
    pub fn relu(&self) -> Node {
        relu_op(self)
    }
}
