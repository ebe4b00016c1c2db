//! Edge-exhausting traversal (Hierholzer's method).

use std::collections::HashMap;

use crate::graph::AugmentedGraph;
use crate::models::{NodeId, RouteSegment};

/// Per-node traversal state: which adjacency slots are spent, and a cursor
/// past the slots already examined.
struct SlotState {
    used: Vec<bool>,
    cursor: usize,
}

/// Walks the graph from `start`, consuming every reachable traversal slot
/// at most once, and returns the walk as ordered route segments.
///
/// Hierholzer's method with an explicit frame stack — no recursion, so call
/// depth stays constant on arbitrarily long edge chains. Consuming a base
/// slot also retires its mirror entry at the neighbor (a road walked in one
/// direction is covered); a duplicate overlay slot retires only itself,
/// which is what lets a matched road be walked a second time.
///
/// On a connected graph with all-even effective degree the walk uses every
/// slot exactly once and returns to `start`. Duplicate slots leave
/// traversal degree uneven at the matched endpoints, so when `start` lies
/// elsewhere the output can contain fragmented sub-trails; callers stitch
/// those gaps. Slots in components not reachable from `start` are left
/// unconsumed; detecting and reporting that is the caller's job too.
pub fn traverse(graph: &AugmentedGraph<'_>, start: NodeId) -> Vec<RouteSegment> {
    let mut states: HashMap<NodeId, SlotState> = HashMap::new();
    let mut stack: Vec<(NodeId, Option<RouteSegment>)> = vec![(start, None)];
    let mut path: Vec<RouteSegment> = Vec::new();

    while let Some(&(node, _)) = stack.last() {
        let slots = graph.neighbors(node);
        let state = states.entry(node).or_insert_with(|| SlotState {
            used: vec![false; slots.len()],
            cursor: 0,
        });

        // Advance past spent slots. Mirror retirement can mark slots ahead
        // of the cursor, so each one is re-checked here.
        while state.cursor < slots.len() && state.used[state.cursor] {
            state.cursor += 1;
        }

        if state.cursor >= slots.len() {
            // Dead end: emit the segment that got us here and backtrack.
            let (_, segment) = stack.pop().unwrap_or((node, None));
            if let Some(segment) = segment {
                path.push(segment);
            }
            continue;
        }

        let index = state.cursor;
        state.used[index] = true;
        state.cursor += 1;
        let slot = slots[index];

        let is_base_slot = index < graph.base_len(node);
        if is_base_slot {
            retire_mirror(graph, &mut states, node, slot.to);
        }

        let segment = RouteSegment {
            from: node,
            to: slot.to,
            edge: slot.edge,
            distance: slot.distance,
        };
        stack.push((slot.to, Some(segment)));
    }

    // Segments were emitted on backtrack, deepest first.
    path.reverse();
    path
}

/// Marks the first unused base slot `to -> from` as spent.
fn retire_mirror(
    graph: &AugmentedGraph<'_>,
    states: &mut HashMap<NodeId, SlotState>,
    from: NodeId,
    to: NodeId,
) {
    let slots = graph.neighbors(to);
    let state = states.entry(to).or_insert_with(|| SlotState {
        used: vec![false; slots.len()],
        cursor: 0,
    });
    let base_len = graph.base_len(to);
    for (i, slot) in slots.iter().take(base_len).enumerate() {
        if !state.used[i] && slot.to == from {
            state.used[i] = true;
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AugmentedGraph, Graph};
    use crate::matching::{MatchedPair, Matching};
    use crate::models::{EdgeSpec, Node, SegmentId};

    fn square_graph() -> Graph {
        let nodes = vec![
            Node::new(NodeId(1), 0.0, 0.0),
            Node::new(NodeId(2), 0.0, 1.0),
            Node::new(NodeId(3), 1.0, 1.0),
            Node::new(NodeId(4), 1.0, 0.0),
        ];
        let edges = vec![
            EdgeSpec::new(NodeId(1), NodeId(2), 100.0),
            EdgeSpec::new(NodeId(2), NodeId(3), 100.0),
            EdgeSpec::new(NodeId(3), NodeId(4), 100.0),
            EdgeSpec::new(NodeId(4), NodeId(1), 100.0),
        ];
        Graph::build(nodes, &edges).expect("valid")
    }

    fn covered_segments(path: &[RouteSegment]) -> std::collections::HashSet<SegmentId> {
        path.iter().map(|s| s.edge.segment()).collect()
    }

    #[test]
    fn test_even_graph_is_a_circuit() {
        let g = square_graph();
        let aug = AugmentedGraph::overlay(&g, &Matching::new());
        let path = traverse(&aug, NodeId(1));

        // Each of the 4 roads walked exactly once, in one direction.
        assert_eq!(path.len(), 4);
        assert_eq!(covered_segments(&path).len(), 4);
        assert_eq!(path[0].from, NodeId(1));
        assert_eq!(path.last().expect("non-empty").to, NodeId(1));
        // Steps chain: each step starts where the previous ended.
        for w in path.windows(2) {
            assert_eq!(w[0].to, w[1].from);
        }
    }

    #[test]
    fn test_duplicate_slot_walked_twice() {
        let g = square_graph();
        let matching = vec![MatchedPair {
            a: NodeId(1),
            b: NodeId(2),
            path: vec![NodeId(1), NodeId(2)],
        }];
        let aug = AugmentedGraph::overlay(&g, &matching);
        let path = traverse(&aug, NodeId(1));

        // 4 base roads + 1 duplicate traversal of (1,2).
        assert_eq!(path.len(), 5);
        assert_eq!(covered_segments(&path).len(), 4);
        let dup_count = path
            .iter()
            .filter(|s| s.edge.segment() == SegmentId::of(NodeId(1), NodeId(2)))
            .count();
        assert_eq!(dup_count, 2);
        for w in path.windows(2) {
            assert_eq!(w[0].to, w[1].from);
        }
    }

    #[test]
    fn test_disconnected_component_left_unconsumed() {
        let nodes = vec![
            Node::new(NodeId(1), 0.0, 0.0),
            Node::new(NodeId(2), 0.0, 1.0),
            Node::new(NodeId(5), 5.0, 5.0),
            Node::new(NodeId(6), 5.0, 6.0),
        ];
        let edges = vec![
            EdgeSpec::new(NodeId(1), NodeId(2), 100.0),
            EdgeSpec::new(NodeId(5), NodeId(6), 100.0),
        ];
        let g = Graph::build(nodes, &edges).expect("valid");
        let aug = AugmentedGraph::overlay(&g, &Matching::new());
        let path = traverse(&aug, NodeId(1));

        assert!(!covered_segments(&path).contains(&SegmentId::of(NodeId(5), NodeId(6))));
    }

    #[test]
    fn test_isolated_start_yields_empty_walk() {
        let nodes = vec![
            Node::new(NodeId(1), 0.0, 0.0),
            Node::new(NodeId(2), 0.0, 1.0),
            Node::new(NodeId(9), 9.0, 9.0),
        ];
        let edges = vec![EdgeSpec::new(NodeId(1), NodeId(2), 100.0)];
        let g = Graph::build(nodes, &edges).expect("valid");
        let aug = AugmentedGraph::overlay(&g, &Matching::new());
        assert!(traverse(&aug, NodeId(9)).is_empty());
    }

    #[test]
    fn test_chain_covers_each_road_once() {
        // 1 - 2 - 3: odd endpoints, walk ends at the far end.
        let nodes = vec![
            Node::new(NodeId(1), 0.0, 0.0),
            Node::new(NodeId(2), 0.0, 1.0),
            Node::new(NodeId(3), 0.0, 2.0),
        ];
        let edges = vec![
            EdgeSpec::new(NodeId(1), NodeId(2), 100.0),
            EdgeSpec::new(NodeId(2), NodeId(3), 100.0),
        ];
        let g = Graph::build(nodes, &edges).expect("valid");
        let aug = AugmentedGraph::overlay(&g, &Matching::new());
        let path = traverse(&aug, NodeId(1));

        assert_eq!(path.len(), 2);
        assert_eq!(path[0].from, NodeId(1));
        assert_eq!(path[1].to, NodeId(3));
    }
}
