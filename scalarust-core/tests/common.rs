use scalarust_core::Node;

// Helpers shared by the integration test crates.
// Added allow(dead_code) because usage across different test crates isn't detected easily.

/// Installs `env_logger` once so `RUST_LOG=trace cargo test` shows the engine's logs.
#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates one leaf node per value.
#[allow(dead_code)]
pub(crate) fn leaves(values: &[f64]) -> Vec<Node> {
    values.iter().copied().map(Node::new).collect()
}
