//! Traveled-edge bookkeeping.

use std::collections::HashSet;

use super::{EdgeId, NodeId, SegmentId};

/// The set of road segments already covered by previously recorded routes.
///
/// Keyed by [`SegmentId`], so a road recorded in either direction counts as
/// covered in both. Membership of a directed edge is checked through its
/// segment.
///
/// # Examples
///
/// ```
/// use roadcover::models::{EdgeId, NodeId, TraveledEdgeSet};
///
/// let mut traveled = TraveledEdgeSet::new();
/// traveled.mark(NodeId(1), NodeId(2));
/// assert!(traveled.contains_edge(EdgeId::new(NodeId(2), NodeId(1))));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraveledEdgeSet {
    segments: HashSet<SegmentId>,
}

impl TraveledEdgeSet {
    /// Creates an empty set: nothing has been covered yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the road between two nodes as covered, in both directions.
    pub fn mark(&mut self, u: NodeId, v: NodeId) {
        self.segments.insert(SegmentId::of(u, v));
    }

    /// Whether the road carrying this directed edge is covered.
    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        self.segments.contains(&edge.segment())
    }

    /// Whether this segment is covered.
    pub fn contains_segment(&self, segment: SegmentId) -> bool {
        self.segments.contains(&segment)
    }

    /// Number of covered segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// `true` if nothing is covered.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
