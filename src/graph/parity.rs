//! Odd-degree node detection.

use crate::models::{NodeId, TraveledEdgeSet};

use super::Graph;

/// Returns the nodes whose required-edge degree is odd, sorted by id.
///
/// A node's required degree is the count of its outgoing adjacency entries
/// whose road is not in the traveled set. Because every logical segment is
/// mirrored at both endpoints, counting outgoing entries only is equivalent
/// to counting incident segments. A node with no required edges has degree
/// zero and is never returned, even if isolated.
///
/// By the handshake lemma the returned set always has even cardinality.
pub fn find_odd_degree_nodes(graph: &Graph, traveled: &TraveledEdgeSet) -> Vec<NodeId> {
    let mut odd: Vec<NodeId> = graph
        .node_ids()
        .filter(|&id| {
            let degree = graph
                .neighbors(id)
                .iter()
                .filter(|a| !traveled.contains_edge(a.edge))
                .count();
            degree % 2 == 1
        })
        .collect();
    odd.sort_unstable();
    odd
}
