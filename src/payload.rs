//! JSON payload types for the optimization boundary.
//!
//! Mirrors the wire contract of the surrounding service: a request carrying
//! the road network, the required endpoints, and previously recorded
//! routes; a response carrying the ordered walk and its distance totals.
//! Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

use crate::error::RouteError;
use crate::graph::Graph;
use crate::models::{EdgeSpec, Node, NodeId, RouteSegment, SegmentId, TraveledEdgeSet};
use crate::solver::solve;

/// The road network as delivered by the network source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    /// Network nodes.
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// Logical road segments.
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

/// One step of a previously recorded route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecordedSegment {
    /// Step origin.
    pub from: NodeId,
    /// Step destination.
    pub to: NodeId,
}

/// A previously recorded route; its steps mark roads as traveled in both
/// directions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordedRoute {
    /// The recorded steps.
    #[serde(default)]
    pub segments: Vec<RecordedSegment>,
}

/// A solve request: network, endpoints, and prior coverage.
///
/// # Examples
///
/// ```
/// use roadcover::payload::SolveRequest;
///
/// let request: SolveRequest = serde_json::from_str(r#"{
///     "network": {
///         "nodes": [
///             {"id": 1, "lat": 0.0, "lon": 0.0},
///             {"id": 2, "lat": 0.0, "lon": 1.0}
///         ],
///         "edges": [{"from": 1, "to": 2, "distance": 100.0}]
///     },
///     "startPoint": 1,
///     "endPoint": 2
/// }"#).unwrap();
/// assert!(request.existing_routes.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveRequest {
    /// The road network to cover.
    pub network: Network,
    /// Required start node.
    pub start_point: NodeId,
    /// Required end node.
    pub end_point: NodeId,
    /// Previously recorded routes.
    #[serde(default)]
    pub existing_routes: Vec<RecordedRoute>,
}

impl SolveRequest {
    /// Collects the traveled-segment set from the recorded routes.
    pub fn traveled_edges(&self) -> TraveledEdgeSet {
        let mut traveled = TraveledEdgeSet::new();
        for route in &self.existing_routes {
            for segment in &route.segments {
                traveled.mark(segment.from, segment.to);
            }
        }
        traveled
    }
}

/// A solve response: the walk and its distance totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResponse {
    /// The ordered output walk.
    pub route: Vec<RouteSegment>,
    /// Sum of every step's distance, meters.
    pub total_distance: f64,
    /// Sum over previously uncovered roads, meters.
    pub new_distance: f64,
    /// Required segments the walk could not reach; empty means full
    /// coverage.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub uncovered_segments: Vec<SegmentId>,
}

/// Runs one full optimization from a wire request.
///
/// Builds and validates the graph, derives the traveled set, solves, and
/// shapes the response. One call per request; nothing is cached or shared.
///
/// # Errors
///
/// Any [`RouteError`] from graph construction or solving.
///
/// # Examples
///
/// ```
/// use roadcover::models::{EdgeSpec, Node, NodeId};
/// use roadcover::payload::{optimize, Network, SolveRequest};
///
/// let request = SolveRequest {
///     network: Network {
///         nodes: vec![
///             Node::new(NodeId(1), 0.0, 0.0),
///             Node::new(NodeId(2), 0.0, 1.0),
///             Node::new(NodeId(3), 1.0, 1.0),
///         ],
///         edges: vec![
///             EdgeSpec::new(NodeId(1), NodeId(2), 100.0),
///             EdgeSpec::new(NodeId(2), NodeId(3), 100.0),
///             EdgeSpec::new(NodeId(3), NodeId(1), 100.0),
///         ],
///     },
///     start_point: NodeId(1),
///     end_point: NodeId(1),
///     existing_routes: vec![],
/// };
///
/// let response = optimize(&request).unwrap();
/// assert_eq!(response.total_distance, 300.0);
/// assert!(response.uncovered_segments.is_empty());
/// ```
pub fn optimize(request: &SolveRequest) -> Result<SolveResponse, RouteError> {
    let graph = Graph::build(request.network.nodes.clone(), &request.network.edges)?;
    let traveled = request.traveled_edges();
    let result = solve(&graph, request.start_point, request.end_point, &traveled)?;

    let total_distance = result.total_distance();
    let new_distance = result.new_distance();
    let uncovered_segments = result.uncovered().to_vec();
    Ok(SolveResponse {
        route: result.into_route(),
        total_distance,
        new_distance,
        uncovered_segments,
    })
}
