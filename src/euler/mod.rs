//! Eulerian circuit construction.
//!
//! - [`traverse`] — stack-based Hierholzer edge consumption
//! - [`stitch_gaps`] — shortest-path connectors between fragmented
//!   sub-trails
//! - [`reconcile_endpoints`] — shortest-path splices to the requested
//!   start/end pair

mod hierholzer;
mod reconcile;

pub use hierholzer::traverse;
pub use reconcile::{reconcile_endpoints, stitch_gaps};
