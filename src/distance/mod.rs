//! Geographic distance computation.
//!
//! Provides the haversine great-circle distance used when an input edge
//! arrives without a precomputed length.

mod haversine;

pub use haversine::haversine;
