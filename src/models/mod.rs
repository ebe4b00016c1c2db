//! Domain model types for road-coverage routing.
//!
//! Provides the core abstractions: nodes with geographic positions,
//! directed edge records mirroring undirected roads, traveled-segment
//! bookkeeping, and the ordered output walk with its distance summaries.

mod edge;
mod node;
mod result;
mod segment;
mod traveled;

pub use edge::{Edge, EdgeId, EdgeSpec, ParseEdgeIdError, SegmentId};
pub use node::{Node, NodeId};
pub use result::OptimizationResult;
pub use segment::RouteSegment;
pub use traveled::TraveledEdgeSet;
