use approx::assert_relative_eq;
use scalarust_core::utils::testing::{check_grad_near, check_value_near};
use scalarust_core::Node;

mod common;
use common::init_logger;

#[test]
fn test_reference_scenario() {
    init_logger();
    let a = Node::new(2.0);
    let b = Node::new(-3.0);
    let c = Node::new(10.0);
    let e = &a * &b;
    let d = &e + &c;
    let f = Node::new(-2.0);
    let l = &d * &f;
    l.backward();

    assert_eq!(l.value(), -8.0);
    assert_eq!(f.grad(), 4.0);
    assert_eq!(d.grad(), -2.0);
    assert_eq!(e.grad(), -2.0);
    assert_eq!(c.grad(), -2.0);
    assert_eq!(b.grad(), -4.0);
    assert_eq!(a.grad(), 6.0);
}

#[test]
fn test_forward_matches_closed_form() {
    init_logger();
    let (xv, yv) = (1.25_f64, -0.5_f64);
    let x = Node::new(xv);
    let y = Node::new(yv);

    // ((x^2 - 3y) / (x + 4)) * relu(x - y) - 1
    let expr = (x.pow(2.0) - &y * 3.0) / (&x + 4.0) * (&x - &y).relu() - 1.0;
    let expected = (xv.powi(2) - 3.0 * yv) / (xv + 4.0) * (xv - yv).max(0.0) - 1.0;
    check_value_near(&expr, expected, 1e-12);
}

#[test]
fn test_shared_subexpression_gradients_sum() {
    init_logger();
    // root = x*y + x^3, x used on two independent paths.
    let x = Node::new(2.0);
    let y = Node::new(5.0);
    let root = &x * &y + x.pow(3.0);
    root.backward();

    assert_eq!(root.value(), 18.0);
    // y from the product, 3x^2 from the cube
    assert_eq!(x.grad(), 5.0 + 12.0);
    assert_eq!(y.grad(), 2.0);
}

#[test]
fn test_intermediate_node_reused_in_diamond() {
    init_logger();
    let x = Node::new(3.0);
    let h = &x * 2.0; // shared intermediate
    let left = h.pow(2.0);
    let right = &h + 1.0;
    let root = &left * &right;
    root.backward();

    // root = (2x)^2 * (2x + 1) = 4x^2 (2x + 1), d/dx = 24x^2 + 8x
    assert_eq!(root.value(), 36.0 * 7.0);
    assert_relative_eq!(x.grad(), 24.0 * 9.0 + 24.0, epsilon = 1e-9);
    // d/dh = 2h(h + 1) + h^2
    check_grad_near(&h, 2.0 * 6.0 * 7.0 + 36.0, 1e-9);
}
