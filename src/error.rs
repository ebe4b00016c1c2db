//! Error taxonomy for graph construction and solving.

use crate::models::{EdgeId, NodeId};

/// Errors surfaced by graph construction and route solving.
///
/// Partial coverage of a disconnected network is deliberately *not* an
/// error: the solver returns the partial route annotated with the
/// uncovered segments instead (see
/// [`OptimizationResult::uncovered`](crate::models::OptimizationResult::uncovered)).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    /// An input edge references a node id absent from the node list.
    #[error("edge from {from} to {to} references unknown node {missing}")]
    MalformedGraph {
        /// Edge tail as given in the input.
        from: NodeId,
        /// Edge head as given in the input.
        to: NodeId,
        /// The referenced node id that does not exist.
        missing: NodeId,
    },

    /// An input edge carries a negative or non-finite distance.
    #[error("edge from {from} to {to} has invalid distance {distance}")]
    InvalidDistance {
        /// Edge tail.
        from: NodeId,
        /// Edge head.
        to: NodeId,
        /// The offending distance value.
        distance: f64,
    },

    /// A requested start or end point is not a node of the graph.
    #[error("endpoint {0} is not a node of the graph")]
    UnknownEndpoint(NodeId),

    /// No path exists between two nodes that the solve needs to connect.
    #[error("no path from {from} to {to}")]
    Unreachable {
        /// Path origin.
        from: NodeId,
        /// Path target.
        to: NodeId,
    },

    /// A walk step references a directed edge missing from the edge map.
    ///
    /// Indicates an internally inconsistent graph; cannot occur for graphs
    /// produced by [`Graph::build`](crate::graph::Graph::build).
    #[error("walk references edge {0} missing from the graph")]
    MissingEdge(EdgeId),
}
