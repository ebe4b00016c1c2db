//! # roadcover
//!
//! Road-coverage route optimization: given a road network and a required
//! start/end pair, computes a walk traversing every road segment at least
//! once — a Chinese Postman Problem with credit for previously traveled
//! roads and fixed endpoints.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Node, Edge, TraveledEdgeSet, RouteSegment)
//! - [`graph`] — Network construction, degree parity, adjacency augmentation
//! - [`search`] — Dijkstra shortest path over the full network
//! - [`matching`] — Greedy proximity pairing of odd-degree nodes
//! - [`euler`] — Stack-based Hierholzer traversal and endpoint reconciliation
//! - [`solver`] — Solve orchestration and distance accounting
//! - [`distance`] — Haversine great-circle distance
//! - [`payload`] — JSON request/response types and the one-call [`payload::optimize`]
//! - [`error`] — Error taxonomy

pub mod distance;
pub mod error;
pub mod euler;
pub mod graph;
pub mod matching;
pub mod models;
pub mod payload;
pub mod search;
pub mod solver;
