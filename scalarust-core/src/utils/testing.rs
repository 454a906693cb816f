use crate::node::Node;

/// Checks that a node's value is within `tolerance` of `expected`.
/// Panics with the node's description otherwise.
pub fn check_value_near(actual: &Node, expected: f64, tolerance: f64) {
    let diff = (actual.value() - expected).abs();
    if diff.is_nan() || diff > tolerance {
        panic!(
            "Value mismatch for {:?}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual,
            actual.value(),
            expected,
            diff,
            tolerance
        );
    }
}

/// Checks that a node's accumulated gradient is within `tolerance` of `expected`.
/// Panics with the node's description otherwise.
pub fn check_grad_near(actual: &Node, expected: f64, tolerance: f64) {
    let diff = (actual.grad() - expected).abs();
    if diff.is_nan() || diff > tolerance {
        panic!(
            "Gradient mismatch for {:?}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual,
            actual.grad(),
            expected,
            diff,
            tolerance
        );
    }
}
