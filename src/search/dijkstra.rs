//! Single-source shortest path.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::error::RouteError;
use crate::graph::Graph;
use crate::models::NodeId;

/// Frontier entry ordered so the `BinaryHeap` pops the smallest tentative
/// distance first. Ties break on node id to keep the search deterministic.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Candidate {
    distance: f64,
    node: NodeId,
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap. Distances are validated
        // finite at graph construction, so total_cmp is a plain order.
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest path from `start` to `end` over the full adjacency, as the
/// node sequence `start ..= end`.
///
/// Dijkstra with a binary-heap frontier and backpointer reconstruction,
/// stopping as soon as `end` settles. Traveled status is ignored: every
/// edge is traversable for this query.
///
/// # Errors
///
/// [`RouteError::Unreachable`] when `end` cannot be reached from `start` —
/// callers must not treat this as "no path needed".
///
/// # Examples
///
/// ```
/// use roadcover::graph::Graph;
/// use roadcover::models::{EdgeSpec, Node, NodeId};
/// use roadcover::search::shortest_path;
///
/// let nodes = vec![
///     Node::new(NodeId(1), 0.0, 0.0),
///     Node::new(NodeId(2), 0.0, 1.0),
///     Node::new(NodeId(3), 0.0, 2.0),
/// ];
/// let edges = vec![
///     EdgeSpec::new(NodeId(1), NodeId(2), 100.0),
///     EdgeSpec::new(NodeId(2), NodeId(3), 100.0),
/// ];
/// let graph = Graph::build(nodes, &edges).unwrap();
///
/// let path = shortest_path(&graph, NodeId(1), NodeId(3)).unwrap();
/// assert_eq!(path, vec![NodeId(1), NodeId(2), NodeId(3)]);
/// ```
pub fn shortest_path(
    graph: &Graph,
    start: NodeId,
    end: NodeId,
) -> Result<Vec<NodeId>, RouteError> {
    if !graph.contains_node(start) {
        return Err(RouteError::UnknownEndpoint(start));
    }
    if !graph.contains_node(end) {
        return Err(RouteError::UnknownEndpoint(end));
    }
    if start == end {
        return Ok(vec![start]);
    }

    let mut distances: HashMap<NodeId, f64> = HashMap::new();
    let mut previous: HashMap<NodeId, NodeId> = HashMap::new();
    let mut frontier = BinaryHeap::new();

    distances.insert(start, 0.0);
    frontier.push(Candidate {
        distance: 0.0,
        node: start,
    });

    while let Some(Candidate { distance, node }) = frontier.pop() {
        if node == end {
            break;
        }
        // Stale entry: this node was already settled at a shorter distance.
        if distances.get(&node).is_some_and(|&d| distance > d) {
            continue;
        }

        for adj in graph.neighbors(node) {
            let next = distance + adj.distance;
            let improved = distances.get(&adj.to).map_or(true, |&d| next < d);
            if improved {
                distances.insert(adj.to, next);
                previous.insert(adj.to, node);
                frontier.push(Candidate {
                    distance: next,
                    node: adj.to,
                });
            }
        }
    }

    if !previous.contains_key(&end) {
        return Err(RouteError::Unreachable {
            from: start,
            to: end,
        });
    }

    let mut path = vec![end];
    let mut current = end;
    while let Some(&prev) = previous.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EdgeSpec, Node};

    fn diamond() -> Graph {
        // Two routes from 1 to 4: via 2 (long) or via 3 (short).
        let nodes = vec![
            Node::new(NodeId(1), 0.0, 0.0),
            Node::new(NodeId(2), 0.0, 1.0),
            Node::new(NodeId(3), 1.0, 0.0),
            Node::new(NodeId(4), 1.0, 1.0),
        ];
        let edges = vec![
            EdgeSpec::new(NodeId(1), NodeId(2), 500.0),
            EdgeSpec::new(NodeId(2), NodeId(4), 500.0),
            EdgeSpec::new(NodeId(1), NodeId(3), 100.0),
            EdgeSpec::new(NodeId(3), NodeId(4), 100.0),
        ];
        Graph::build(nodes, &edges).expect("valid")
    }

    #[test]
    fn test_picks_shorter_route() {
        let g = diamond();
        let path = shortest_path(&g, NodeId(1), NodeId(4)).expect("reachable");
        assert_eq!(path, vec![NodeId(1), NodeId(3), NodeId(4)]);
    }

    #[test]
    fn test_runs_backwards_too() {
        let g = diamond();
        let path = shortest_path(&g, NodeId(4), NodeId(1)).expect("reachable");
        assert_eq!(path, vec![NodeId(4), NodeId(3), NodeId(1)]);
    }

    #[test]
    fn test_start_equals_end() {
        let g = diamond();
        let path = shortest_path(&g, NodeId(2), NodeId(2)).expect("trivial");
        assert_eq!(path, vec![NodeId(2)]);
    }

    #[test]
    fn test_unreachable_is_error() {
        let nodes = vec![
            Node::new(NodeId(1), 0.0, 0.0),
            Node::new(NodeId(2), 0.0, 1.0),
            Node::new(NodeId(3), 5.0, 5.0),
            Node::new(NodeId(4), 5.0, 6.0),
        ];
        let edges = vec![
            EdgeSpec::new(NodeId(1), NodeId(2), 100.0),
            EdgeSpec::new(NodeId(3), NodeId(4), 100.0),
        ];
        let g = Graph::build(nodes, &edges).expect("valid");
        let err = shortest_path(&g, NodeId(1), NodeId(3)).expect_err("disconnected");
        assert_eq!(
            err,
            RouteError::Unreachable {
                from: NodeId(1),
                to: NodeId(3),
            }
        );
    }

    #[test]
    fn test_unknown_endpoint_is_error() {
        let g = diamond();
        assert_eq!(
            shortest_path(&g, NodeId(1), NodeId(99)),
            Err(RouteError::UnknownEndpoint(NodeId(99)))
        );
        assert_eq!(
            shortest_path(&g, NodeId(99), NodeId(1)),
            Err(RouteError::UnknownEndpoint(NodeId(99)))
        );
    }

    #[test]
    fn test_zero_weight_edges() {
        let nodes = vec![
            Node::new(NodeId(1), 0.0, 0.0),
            Node::new(NodeId(2), 0.0, 0.0),
            Node::new(NodeId(3), 0.0, 0.0),
        ];
        let edges = vec![
            EdgeSpec::new(NodeId(1), NodeId(2), 0.0),
            EdgeSpec::new(NodeId(2), NodeId(3), 0.0),
        ];
        let g = Graph::build(nodes, &edges).expect("valid");
        let path = shortest_path(&g, NodeId(1), NodeId(3)).expect("reachable");
        assert_eq!(path, vec![NodeId(1), NodeId(2), NodeId(3)]);
    }
}
