//! Distance accounting over the final walk.

use crate::models::{RouteSegment, TraveledEdgeSet};

/// Sums total and new distance over a walk.
///
/// Total distance is the sum of every step; new distance counts only steps
/// over roads absent from the traveled set. A road walked twice (duplicated
/// by augmentation or revisited by a reconciliation detour) contributes
/// each time it is stepped on. Both sums are zero for an empty walk.
pub fn summarize(walk: &[RouteSegment], traveled: &TraveledEdgeSet) -> (f64, f64) {
    let total = walk.iter().map(|s| s.distance).sum();
    let new = walk
        .iter()
        .filter(|s| !traveled.contains_edge(s.edge))
        .map(|s| s.distance)
        .sum();
    (total, new)
}
