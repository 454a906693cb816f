use crate::autograd::BackwardOp;
use crate::node::Node;

// --- Backward Operation Structure ---

/// Backward operation context for multiplication.
/// Operand values are copied at construction; they never change afterwards.
#[derive(Debug)]
struct MulBackward {
    a_value: f64,
    b_value: f64,
}

impl BackwardOp for MulBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        // grad_a = grad_output * b, grad_b = grad_output * a
        vec![self.b_value * grad_output, self.a_value * grad_output]
    }
}

// --- Forward Operation ---

/// Multiplies two nodes. Tag `"*"`.
pub fn mul_op(a: &Node, b: &Node) -> Node {
    let a_value = a.value();
    let b_value = b.value();
    Node::from_op(
        a_value * b_value,
        vec![a.clone(), b.clone()],
        Box::new(MulBackward { a_value, b_value }),
        "*",
    )
}

impl_binary_operator!(Mul, mul, mul_op);
