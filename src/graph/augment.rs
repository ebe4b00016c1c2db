//! Adjacency overlay that makes matched segments traversable twice.

use std::collections::HashMap;

use crate::matching::Matching;
use crate::models::{EdgeId, NodeId};

use super::{Adjacent, Graph};

/// A [`Graph`] overlaid with duplicate adjacency entries along every
/// matched path.
///
/// The base graph is not mutated. Each consecutive `(u, v)` pair of a
/// matched path appends one extra traversal slot for the existing directed
/// edge `u -> v`; no new edge-map records are created. After overlay, every
/// node's effective degree is even, which is what makes an edge-exhausting
/// traversal possible.
///
/// Entries at indices below the base adjacency length are base slots; the
/// appended duplicates follow them, which is how the circuit builder tells
/// the two kinds apart.
#[derive(Debug)]
pub struct AugmentedGraph<'a> {
    base: &'a Graph,
    adjacency: HashMap<NodeId, Vec<Adjacent>>,
}

impl<'a> AugmentedGraph<'a> {
    /// Overlays the duplication edges of a matching onto a base graph.
    ///
    /// Matched path steps without a corresponding directed edge in the base
    /// graph are skipped; shortest paths only ever walk existing edges, so
    /// this does not occur for matchings produced by
    /// [`pair_odd_nodes`](crate::matching::pair_odd_nodes).
    pub fn overlay(base: &'a Graph, matching: &Matching) -> Self {
        let mut adjacency: HashMap<NodeId, Vec<Adjacent>> = base
            .node_ids()
            .map(|id| (id, base.neighbors(id).to_vec()))
            .collect();

        for pair in matching {
            for step in pair.path.windows(2) {
                let (u, v) = (step[0], step[1]);
                let id = EdgeId::new(u, v);
                if let Some(edge) = base.edge(id) {
                    adjacency.entry(u).or_default().push(Adjacent {
                        to: v,
                        edge: id,
                        distance: edge.distance(),
                    });
                }
            }
        }

        Self { base, adjacency }
    }

    /// The underlying graph.
    pub fn base(&self) -> &Graph {
        self.base
    }

    /// Overlaid adjacency entries of a node: base slots first, then
    /// duplicates.
    pub fn neighbors(&self, id: NodeId) -> &[Adjacent] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of base (non-duplicate) slots at a node.
    pub fn base_len(&self, id: NodeId) -> usize {
        self.base.neighbors(id).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::MatchedPair;
    use crate::models::{EdgeSpec, Node};

    fn path_graph() -> Graph {
        // 1 - 2 - 3, a simple chain.
        let nodes = vec![
            Node::new(NodeId(1), 0.0, 0.0),
            Node::new(NodeId(2), 0.0, 1.0),
            Node::new(NodeId(3), 0.0, 2.0),
        ];
        let edges = vec![
            EdgeSpec::new(NodeId(1), NodeId(2), 100.0),
            EdgeSpec::new(NodeId(2), NodeId(3), 100.0),
        ];
        Graph::build(nodes, &edges).expect("valid")
    }

    #[test]
    fn test_empty_matching_copies_adjacency() {
        let g = path_graph();
        let aug = AugmentedGraph::overlay(&g, &Matching::new());
        for id in g.node_ids() {
            assert_eq!(aug.neighbors(id), g.neighbors(id));
        }
    }

    #[test]
    fn test_overlay_appends_duplicate_slots() {
        let g = path_graph();
        let matching = vec![MatchedPair {
            a: NodeId(1),
            b: NodeId(3),
            path: vec![NodeId(1), NodeId(2), NodeId(3)],
        }];
        let aug = AugmentedGraph::overlay(&g, &matching);

        // One duplicate slot appended at each path tail.
        assert_eq!(aug.neighbors(NodeId(1)).len(), 2);
        assert_eq!(aug.neighbors(NodeId(2)).len(), 3);
        assert_eq!(aug.base_len(NodeId(1)), 1);
        assert_eq!(aug.base_len(NodeId(2)), 2);

        let dup = aug.neighbors(NodeId(1))[1];
        assert_eq!(dup.edge, EdgeId::new(NodeId(1), NodeId(2)));
        assert_eq!(dup.distance, 100.0);
    }

    #[test]
    fn test_overlay_does_not_mutate_base() {
        let g = path_graph();
        let matching = vec![MatchedPair {
            a: NodeId(1),
            b: NodeId(3),
            path: vec![NodeId(1), NodeId(2), NodeId(3)],
        }];
        let _aug = AugmentedGraph::overlay(&g, &matching);
        assert_eq!(g.neighbors(NodeId(1)).len(), 1);
        assert_eq!(g.num_adjacency_entries(), 4);
    }
}
