//! Shortest-path search over the full network.
//!
//! Used both for odd-node pairing and for endpoint reconciliation.

mod dijkstra;

pub use dijkstra::shortest_path;
