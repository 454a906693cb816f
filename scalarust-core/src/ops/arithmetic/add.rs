// scalarust-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::node::Node;

// --- Backward Operation ---

/// Backward operation for addition: d(a + b)/da = d(a + b)/db = 1.
#[derive(Debug)]
struct AddBackward;

impl BackwardOp for AddBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![grad_output, grad_output]
    }
}

// --- Forward Operation ---

/// Adds two nodes. Tag `"+"`.
pub fn add_op(a: &Node, b: &Node) -> Node {
    Node::from_op(
        a.value() + b.value(),
        vec![a.clone(), b.clone()],
        Box::new(AddBackward),
        "+",
    )
}

impl_binary_operator!(Add, add, add_op);
