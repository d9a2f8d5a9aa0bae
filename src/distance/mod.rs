//! Great-circle distance.
//!
//! The geodesic distance between coordinates, used as the edge-metric
//! fallback, the A* heuristic input, and nearest-node projection.

mod haversine;

pub use haversine::haversine_km;
