//! A single neuron, relu(w1*x1 + w2*x2 + b), and the gradient of its output
//! with respect to each weight. The gradients are checked against finite
//! differences.

use scalarust_core::autograd::{check_grad, GradCheckConfig};
use scalarust_core::Node;

fn neuron(params: &[Node]) -> Node {
    let (x1, x2, w1, w2, b) = (&params[0], &params[1], &params[2], &params[3], &params[4]);
    (w1 * x1 + w2 * x2 + b).relu()
}

fn main() {
    env_logger::init();

    let params: Vec<Node> = [2.0, 0.0, -3.0, 1.0, 6.88]
        .iter()
        .copied()
        .map(Node::new)
        .collect();
    let names = ["x1", "x2", "w1", "w2", "b"];

    let out = neuron(&params);
    out.backward();
    println!("out = {}", out);
    for (name, p) in names.iter().zip(&params) {
        println!("d(out)/d({}) = {}", name, p.grad());
    }

    match check_grad(neuron, &params, &GradCheckConfig::default()) {
        Ok(()) => println!("gradient check passed"),
        Err(e) => println!("gradient check failed: {}", e),
    }
}
