//! Greedy proximity pairing of odd-degree nodes.

use crate::error::RouteError;
use crate::graph::Graph;
use crate::models::NodeId;
use crate::search::shortest_path;

/// Two odd-degree nodes and the shortest walk connecting them.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedPair {
    /// First node of the pair.
    pub a: NodeId,
    /// Second node of the pair.
    pub b: NodeId,
    /// Node sequence of the connecting walk, `a ..= b`.
    pub path: Vec<NodeId>,
}

/// A set of odd-node pairs with their connecting paths.
pub type Matching = Vec<MatchedPair>;

/// Pairs odd-degree nodes and connects each pair by a shortest path.
///
/// Heuristic: sort the odd nodes by `(lat, lon)` and pair consecutive
/// entries. This is a greedy proximity heuristic, not a minimum-weight
/// perfect matching — it always yields a valid even-degree augmentation but
/// can cost more than an exact matcher (Blossom, min-cost flow) would. The
/// interface is the substitution point: swapping the pairing strategy does
/// not touch augmentation or traversal.
///
/// The odd set always has even cardinality (handshake lemma); a trailing
/// unpaired node is skipped rather than rejected.
///
/// # Errors
///
/// [`RouteError::Unreachable`] when a pair spans disconnected components.
pub fn pair_odd_nodes(graph: &Graph, odd_nodes: &[NodeId]) -> Result<Matching, RouteError> {
    debug_assert!(
        odd_nodes.len() % 2 == 0,
        "odd-degree node count must be even (handshake lemma), got {}",
        odd_nodes.len()
    );

    let mut sorted = odd_nodes.to_vec();
    sorted.sort_by(|&x, &y| {
        match (graph.node(x), graph.node(y)) {
            (Some(nx), Some(ny)) => nx
                .lat
                .total_cmp(&ny.lat)
                .then(nx.lon.total_cmp(&ny.lon))
                .then(x.cmp(&y)),
            // Unknown nodes cannot come from the parity analyzer; order
            // them by id so the sort stays total.
            _ => x.cmp(&y),
        }
    });

    let mut matching = Matching::new();
    for pair in sorted.chunks(2) {
        let &[a, b] = pair else { continue };
        let path = shortest_path(graph, a, b)?;
        matching.push(MatchedPair { a, b, path });
    }
    Ok(matching)
}
