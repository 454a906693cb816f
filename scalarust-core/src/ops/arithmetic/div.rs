use crate::node::Node;
use crate::ops::arithmetic::{mul_op, pow_op};

/// Divides as `a * b^-1`, reusing the multiplication and power rules.
///
/// Dividing by a node whose value is 0 gives inf or NaN per IEEE-754; it is
/// not reported as an error.
pub fn div_op(a: &Node, b: &Node) -> Node {
    mul_op(a, &pow_op(b, -1.0))
}

impl_binary_operator!(Div, div, div_op);
