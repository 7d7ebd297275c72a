/// Trees for Monte Carlo tree search: a general Node trait,
/// a single-threaded reference-counted implementation of it,
/// and the per-node search statistics.
pub mod monte_carlo_data;
pub mod rc_tree;
pub mod tree;

pub use monte_carlo_data::{MctsData, MctsResult};
pub use rc_tree::RcNode;
pub use tree::Node;
