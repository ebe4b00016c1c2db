//! Route output step.

use serde::{Deserialize, Serialize};

use super::{EdgeId, NodeId};

/// One step of the final output walk.
///
/// Serializes with the wire field names `{from, to, edgeId, distance}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    /// Step origin.
    pub from: NodeId,
    /// Step destination.
    pub to: NodeId,
    /// The directed edge record this step traverses.
    #[serde(rename = "edgeId")]
    pub edge: EdgeId,
    /// Step length in meters.
    pub distance: f64,
}

impl RouteSegment {
    /// Creates a step along the directed edge `from -> to`.
    pub fn new(from: NodeId, to: NodeId, distance: f64) -> Self {
        Self {
            from,
            to,
            edge: EdgeId::new(from, to),
            distance,
        }
    }
}
