//! Walk repair: gap stitching and endpoint reconciliation.

use crate::error::RouteError;
use crate::graph::Graph;
use crate::models::{EdgeId, NodeId, RouteSegment};
use crate::search::shortest_path;

/// Splices a shortest-path connector into every discontinuity between
/// consecutive steps.
///
/// Duplicated roads from augmentation can leave traversal degree uneven
/// away from the start, in which case the edge-exhausting traversal emits
/// fragmented sub-trails. Stitching restores a contiguous walk; connectors
/// carry their true edge distances and revisit roads already in the walk.
///
/// # Errors
///
/// [`RouteError::Unreachable`] when a connector path does not exist. Gap
/// endpoints come from the same traversal component, so this does not
/// happen for walks produced by the traversal itself.
pub fn stitch_gaps(graph: &Graph, walk: &mut Vec<RouteSegment>) -> Result<(), RouteError> {
    let mut i = 1;
    while i < walk.len() {
        let gap_from = walk[i - 1].to;
        let gap_to = walk[i].from;
        if gap_from != gap_to {
            let connector = connecting_segments(graph, gap_from, gap_to)?;
            let added = connector.len();
            walk.splice(i..i, connector);
            i += added;
        }
        i += 1;
    }
    Ok(())
}

/// Splices shortest-path detours so the walk runs `start` to `end`.
///
/// The edge-exhausting traversal starts at `start` but, depending on degree
/// balance, may finish elsewhere. If the walk's first origin differs from
/// `start`, a connecting path is spliced at the front; if its last
/// destination differs from `end`, one is spliced at the back. Spliced
/// steps carry their true edge distances and revisit roads already in the
/// walk — full coverage is the goal, not a simple path.
///
/// An empty walk stays empty when `start == end`. With distinct endpoints
/// it becomes the connecting path itself, so a start with no incident
/// roads surfaces [`RouteError::Unreachable`] instead of an empty result.
///
/// # Errors
///
/// [`RouteError::Unreachable`] when a required connecting path does not
/// exist.
pub fn reconcile_endpoints(
    graph: &Graph,
    walk: &mut Vec<RouteSegment>,
    start: NodeId,
    end: NodeId,
) -> Result<(), RouteError> {
    let Some(first) = walk.first() else {
        if start != end {
            let detour = connecting_segments(graph, start, end)?;
            walk.extend(detour);
        }
        return Ok(());
    };

    if first.from != start {
        let detour = connecting_segments(graph, start, first.from)?;
        walk.splice(0..0, detour);
    }

    let last_to = walk.last().map(|s| s.to);
    if let Some(last_to) = last_to {
        if last_to != end {
            let detour = connecting_segments(graph, last_to, end)?;
            walk.extend(detour);
        }
    }

    Ok(())
}

/// Shortest-path walk from `from` to `to` as route segments with their
/// real distances.
fn connecting_segments(
    graph: &Graph,
    from: NodeId,
    to: NodeId,
) -> Result<Vec<RouteSegment>, RouteError> {
    let nodes = shortest_path(graph, from, to)?;
    nodes
        .windows(2)
        .map(|w| {
            let id = EdgeId::new(w[0], w[1]);
            let edge = graph.edge(id).ok_or(RouteError::MissingEdge(id))?;
            Ok(RouteSegment {
                from: w[0],
                to: w[1],
                edge: id,
                distance: edge.distance(),
            })
        })
        .collect()
}
