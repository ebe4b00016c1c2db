//! Solve output.

use super::{RouteSegment, SegmentId};

/// The outcome of one coverage solve.
///
/// Carries the ordered walk, its distance totals, and — when the network is
/// disconnected relative to the start point — the required segments the walk
/// could not reach. A non-empty [`uncovered`](Self::uncovered) list is the
/// partial-coverage annotation: the route is still useful, it just does not
/// cover everything.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationResult {
    route: Vec<RouteSegment>,
    total_distance: f64,
    new_distance: f64,
    uncovered: Vec<SegmentId>,
}

impl OptimizationResult {
    /// Assembles a result from the finished walk and its summaries.
    pub fn new(
        route: Vec<RouteSegment>,
        total_distance: f64,
        new_distance: f64,
        uncovered: Vec<SegmentId>,
    ) -> Self {
        Self {
            route,
            total_distance,
            new_distance,
            uncovered,
        }
    }

    /// The ordered output walk.
    pub fn route(&self) -> &[RouteSegment] {
        &self.route
    }

    /// Sum of every step's distance, in meters.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Sum of step distances over previously uncovered roads, in meters.
    pub fn new_distance(&self) -> f64 {
        self.new_distance
    }

    /// Required segments the walk did not reach, sorted by id.
    pub fn uncovered(&self) -> &[SegmentId] {
        &self.uncovered
    }

    /// `true` if every required segment was covered.
    pub fn is_complete(&self) -> bool {
        self.uncovered.is_empty()
    }

    /// Consumes the result, returning the walk.
    pub fn into_route(self) -> Vec<RouteSegment> {
        self.route
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NodeId;

    #[test]
    fn test_complete_result() {
        let route = vec![RouteSegment::new(NodeId(1), NodeId(2), 100.0)];
        let r = OptimizationResult::new(route, 100.0, 100.0, vec![]);
        assert!(r.is_complete());
        assert_eq!(r.route().len(), 1);
    }

    #[test]
    fn test_partial_result() {
        let missed = vec![SegmentId::of(NodeId(5), NodeId(6))];
        let r = OptimizationResult::new(vec![], 0.0, 0.0, missed.clone());
        assert!(!r.is_complete());
        assert_eq!(r.uncovered(), missed.as_slice());
    }
}
