use scalarust_core::Node;

fn main() {
    env_logger::init();

    let a = Node::new(2.0);
    let b = Node::new(-3.0);
    let c = Node::new(10.0);
    let e = &a * &b;
    let d = &e + &c;
    let f = Node::new(-2.0);
    let l = &d * &f;

    l.backward();

    println!("L = {}", l);
    println!("dL/da = {}", a.grad());
    println!("dL/db = {}", b.grad());
    println!("dL/dc = {}", c.grad());
    println!("dL/de = {}", e.grad());
    println!("dL/dd = {}", d.grad());
    println!("dL/df = {}", f.grad());
    println!("\nGraph:\n{}", l.graph_summary());
}
