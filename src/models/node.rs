//! Node identity and geographic position.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a network node.
///
/// Numeric, OSM-style. Serializes as a plain JSON number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A node of the road network: an id plus its geographic position.
///
/// Immutable for the duration of a solve call.
///
/// # Examples
///
/// ```
/// use roadcover::models::{Node, NodeId};
///
/// let n = Node::new(NodeId(7), 52.52, 13.40);
/// assert_eq!(n.id, NodeId(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique node id.
    pub id: NodeId,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl Node {
    /// Creates a node at the given position.
    pub fn new(id: NodeId, lat: f64, lon: f64) -> Self {
        Self { id, lat, lon }
    }

    /// Great-circle distance in meters to another node.
    pub fn distance_to(&self, other: &Node) -> f64 {
        crate::distance::haversine(self.lat, self.lon, other.lat, other.lon)
    }
}
