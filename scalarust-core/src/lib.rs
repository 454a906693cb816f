//! # scalarust-core
//!
//! Scalar reverse-mode automatic differentiation. Arithmetic on [`Node`]s
//! builds a computation graph eagerly; [`Node::backward`] then fills in the
//! gradient of that node with respect to everything it depends on.
//!
//! ```
//! use scalarust_core::Node;
//!
//! let a = Node::new(2.0);
//! let b = Node::new(-3.0);
//! let l = (&a * &b + 10.0) * -2.0;
//! l.backward();
//! assert_eq!(l.value(), -8.0);
//! assert_eq!(a.grad(), 6.0);
//! assert_eq!(b.grad(), -4.0);
//! ```

pub mod autograd;
pub mod error;
pub mod node;
pub mod node_data;
pub mod ops;
pub mod utils;

// Re-export the Node type so it is reachable as `scalarust_core::Node`
pub use autograd::graph::NodeId;
pub use error::ScalarustError;
pub use node::Node;
