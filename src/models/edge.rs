//! Directed edge records and logical segment identity.
//!
//! The road network is undirected, but every logical road segment is
//! materialized as two directed [`Edge`] records, one per traversal
//! direction, sharing distance and tags. Identity therefore comes in two
//! flavors: [`EdgeId`] names one direction, [`SegmentId`] names the
//! underlying road regardless of direction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::NodeId;

/// Identity of one directed edge record: the ordered `(from, to)` pair.
///
/// Serializes as the wire string `"<from>_<to>"`.
///
/// # Examples
///
/// ```
/// use roadcover::models::{EdgeId, NodeId};
///
/// let id = EdgeId::new(NodeId(1), NodeId(2));
/// assert_eq!(id.to_string(), "1_2");
/// assert_eq!(id.reversed(), EdgeId::new(NodeId(2), NodeId(1)));
/// assert_eq!(id.segment(), id.reversed().segment());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId {
    /// Tail node.
    pub from: NodeId,
    /// Head node.
    pub to: NodeId,
}

impl EdgeId {
    /// Creates the id of the directed edge `from -> to`.
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }

    /// The id of the opposite-direction record of the same road.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    /// The direction-independent identity of the underlying road segment.
    pub fn segment(&self) -> SegmentId {
        SegmentId::of(self.from, self.to)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.from, self.to)
    }
}

/// Error parsing an [`EdgeId`] or [`SegmentId`] from its wire string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid edge id {0:?}, expected \"<from>_<to>\"")]
pub struct ParseEdgeIdError(pub String);

impl FromStr for EdgeId {
    type Err = ParseEdgeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s
            .split_once('_')
            .ok_or_else(|| ParseEdgeIdError(s.to_owned()))?;
        let from = from
            .parse::<u64>()
            .map_err(|_| ParseEdgeIdError(s.to_owned()))?;
        let to = to
            .parse::<u64>()
            .map_err(|_| ParseEdgeIdError(s.to_owned()))?;
        Ok(Self::new(NodeId(from), NodeId(to)))
    }
}

impl Serialize for EdgeId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EdgeId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Direction-independent identity of a logical road segment.
///
/// The endpoint pair normalized so the smaller node id comes first; both
/// directed records of a road map to the same `SegmentId`. Traveled-edge
/// bookkeeping is keyed by this type so that a road recorded in either
/// direction counts as covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegmentId {
    /// Smaller endpoint id.
    pub a: NodeId,
    /// Larger endpoint id.
    pub b: NodeId,
}

impl SegmentId {
    /// The segment joining two nodes, independent of direction.
    pub fn of(u: NodeId, v: NodeId) -> Self {
        if u <= v {
            Self { a: u, b: v }
        } else {
            Self { a: v, b: u }
        }
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.a, self.b)
    }
}

impl Serialize for SegmentId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SegmentId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let id: EdgeId = s.parse().map_err(serde::de::Error::custom)?;
        Ok(id.segment())
    }
}

/// One directed edge record of the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    id: EdgeId,
    distance: f64,
    tags: Vec<String>,
}

impl Edge {
    /// Creates the directed record `from -> to` with the given distance.
    pub fn new(from: NodeId, to: NodeId, distance: f64, tags: Vec<String>) -> Self {
        Self {
            id: EdgeId::new(from, to),
            distance,
            tags,
        }
    }

    /// Directed identity.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Tail node.
    pub fn from(&self) -> NodeId {
        self.id.from
    }

    /// Head node.
    pub fn to(&self) -> NodeId {
        self.id.to
    }

    /// Length in meters.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Road classification tags carried from the input network.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The opposite-direction record of the same road.
    pub fn reversed(&self) -> Self {
        Self {
            id: self.id.reversed(),
            distance: self.distance,
            tags: self.tags.clone(),
        }
    }
}

/// One logical road segment of the input network, as delivered on the wire.
///
/// `distance` may be omitted, in which case the graph builder computes it
/// from the endpoint coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    /// One endpoint.
    pub from: NodeId,
    /// The other endpoint.
    pub to: NodeId,
    /// Length in meters, if precomputed by the network source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Road classification tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl EdgeSpec {
    /// Creates a segment spec with an explicit distance and no tags.
    pub fn new(from: NodeId, to: NodeId, distance: f64) -> Self {
        Self {
            from,
            to,
            distance: Some(distance),
            tags: Vec::new(),
        }
    }
}
