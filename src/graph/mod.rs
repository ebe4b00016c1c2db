//! Road network graph: construction, parity analysis, and augmentation.
//!
//! - [`Graph`] — validated in-memory network with mirrored directed edges
//! - [`find_odd_degree_nodes`] — required-edge degree parity per node
//! - [`AugmentedGraph`] — adjacency overlay with duplicate traversal slots

mod augment;
mod network;
mod parity;

pub use augment::AugmentedGraph;
pub use network::{Adjacent, Graph};
pub use parity::find_odd_degree_nodes;
