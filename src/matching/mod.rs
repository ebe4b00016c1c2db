//! Odd-node pairing.
//!
//! Produces the duplication paths that the augmenter overlays onto the
//! base graph.

mod greedy;

pub use greedy::{pair_odd_nodes, MatchedPair, Matching};
