//! Coverage-route solve orchestration.
//!
//! Wires the pipeline: parity analysis, odd-node pairing, augmentation,
//! Eulerian traversal, endpoint reconciliation, and distance accounting.

mod cost;

pub use cost::summarize;

use crate::error::RouteError;
use crate::euler::{reconcile_endpoints, stitch_gaps, traverse};
use crate::graph::{find_odd_degree_nodes, AugmentedGraph, Graph};
use crate::matching::{pair_odd_nodes, Matching};
use crate::models::{NodeId, OptimizationResult, RouteSegment, SegmentId, TraveledEdgeSet};

/// Computes a road-coverage walk from `start` to `end`.
///
/// Produces a walk that traverses every road segment of the graph at least
/// once where the network allows it, duplicating roads only as needed to
/// even out required-edge degree. Previously traveled roads still get
/// walked, but are free in the new-distance total.
///
/// Required segments unreachable from `start` (a disconnected network)
/// do not fail the solve: the partial walk is returned with those segments
/// listed in [`OptimizationResult::uncovered`], and a warning is logged.
///
/// Deterministic: identical inputs yield identical walks.
///
/// # Errors
///
/// - [`RouteError::UnknownEndpoint`] if `start` or `end` is not a node of
///   the graph.
/// - [`RouteError::Unreachable`] if odd-node pairing or endpoint
///   reconciliation needs a path that does not exist — including a `start`
///   with no incident roads and a different `end`.
///
/// # Examples
///
/// ```
/// use roadcover::graph::Graph;
/// use roadcover::models::{EdgeSpec, Node, NodeId, TraveledEdgeSet};
/// use roadcover::solver::solve;
///
/// let nodes = vec![
///     Node::new(NodeId(1), 0.0, 0.0),
///     Node::new(NodeId(2), 0.0, 1.0),
///     Node::new(NodeId(3), 1.0, 1.0),
///     Node::new(NodeId(4), 1.0, 0.0),
/// ];
/// let edges = vec![
///     EdgeSpec::new(NodeId(1), NodeId(2), 100.0),
///     EdgeSpec::new(NodeId(2), NodeId(3), 100.0),
///     EdgeSpec::new(NodeId(3), NodeId(4), 100.0),
///     EdgeSpec::new(NodeId(4), NodeId(1), 100.0),
/// ];
/// let graph = Graph::build(nodes, &edges).unwrap();
///
/// let result = solve(&graph, NodeId(1), NodeId(1), &TraveledEdgeSet::new()).unwrap();
/// assert_eq!(result.route().len(), 4);
/// assert_eq!(result.total_distance(), 400.0);
/// assert!(result.is_complete());
/// ```
pub fn solve(
    graph: &Graph,
    start: NodeId,
    end: NodeId,
    traveled: &TraveledEdgeSet,
) -> Result<OptimizationResult, RouteError> {
    if !graph.contains_node(start) {
        return Err(RouteError::UnknownEndpoint(start));
    }
    if !graph.contains_node(end) {
        return Err(RouteError::UnknownEndpoint(end));
    }

    let odd_nodes = find_odd_degree_nodes(graph, traveled);
    log::debug!(
        "solving coverage route: {} nodes, {} directed edges, {} odd",
        graph.num_nodes(),
        graph.num_edges(),
        odd_nodes.len()
    );

    let matching = if odd_nodes.is_empty() {
        Matching::new()
    } else {
        pair_odd_nodes(graph, &odd_nodes)?
    };

    let augmented = AugmentedGraph::overlay(graph, &matching);
    let mut walk = traverse(&augmented, start);
    stitch_gaps(graph, &mut walk)?;
    reconcile_endpoints(graph, &mut walk, start, end)?;

    let uncovered = uncovered_required(graph, traveled, &walk);
    if !uncovered.is_empty() {
        log::warn!(
            "partial coverage: {} required segment(s) unreachable from {start}",
            uncovered.len()
        );
    }

    let (total_distance, new_distance) = summarize(&walk, traveled);
    log::debug!(
        "route has {} steps, total {total_distance:.1} m, new {new_distance:.1} m",
        walk.len()
    );

    Ok(OptimizationResult::new(
        walk,
        total_distance,
        new_distance,
        uncovered,
    ))
}

/// Required segments the walk never stepped on, sorted by id.
fn uncovered_required(
    graph: &Graph,
    traveled: &TraveledEdgeSet,
    walk: &[RouteSegment],
) -> Vec<SegmentId> {
    let mut required = graph.required_segments(traveled);
    for step in walk {
        required.remove(&step.edge.segment());
    }
    let mut missed: Vec<SegmentId> = required.into_iter().collect();
    missed.sort_unstable();
    missed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EdgeSpec, Node};

    fn square() -> (Vec<Node>, Vec<EdgeSpec>) {
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
        (nodes, edges)
    }

    #[test]
    fn test_unknown_start_rejected() {
        let (nodes, edges) = square();
        let g = Graph::build(nodes, &edges).expect("valid");
        let err = solve(&g, NodeId(99), NodeId(1), &TraveledEdgeSet::new())
            .expect_err("unknown");
        assert_eq!(err, RouteError::UnknownEndpoint(NodeId(99)));
    }

    #[test]
    fn test_even_square_is_a_clean_circuit() {
        let (nodes, edges) = square();
        let g = Graph::build(nodes, &edges).expect("valid");
        let result = solve(&g, NodeId(1), NodeId(1), &TraveledEdgeSet::new()).expect("ok");
        assert_eq!(result.route().len(), 4);
        assert_eq!(result.total_distance(), 400.0);
        assert_eq!(result.new_distance(), 400.0);
        assert!(result.is_complete());
    }

    #[test]
    fn test_total_never_below_new() {
        let (nodes, edges) = square();
        let g = Graph::build(nodes, &edges).expect("valid");
        let mut traveled = TraveledEdgeSet::new();
        traveled.mark(NodeId(1), NodeId(2));
        let result = solve(&g, NodeId(1), NodeId(1), &traveled).expect("ok");
        assert!(result.total_distance() >= result.new_distance());
    }

    #[test]
    fn test_isolated_start_with_distinct_end_is_unreachable() {
        let nodes = vec![
            Node::new(NodeId(1), 0.0, 0.0),
            Node::new(NodeId(2), 0.0, 1.0),
            Node::new(NodeId(3), 0.0, 2.0),
        ];
        let edges = vec![EdgeSpec::new(NodeId(2), NodeId(3), 100.0)];
        let g = Graph::build(nodes, &edges).expect("valid");
        // No road touches N1: the solve must not degrade to an empty route
        // with zero totals.
        let err = solve(&g, NodeId(1), NodeId(2), &TraveledEdgeSet::new())
            .expect_err("isolated start");
        assert!(matches!(err, RouteError::Unreachable { .. }));
    }

    #[test]
    fn test_deterministic() {
        let (nodes, edges) = square();
        let g = Graph::build(nodes.clone(), &edges).expect("valid");
        let mut traveled = TraveledEdgeSet::new();
        traveled.mark(NodeId(3), NodeId(4));
        let a = solve(&g, NodeId(1), NodeId(2), &traveled).expect("ok");
        let b = solve(&g, NodeId(1), NodeId(2), &traveled).expect("ok");
        assert_eq!(a, b);
    }
}
